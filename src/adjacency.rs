//! Adjacency Builder
//!
//! Derives a neighbor model from named geometry records: which regions
//! touch which. Every retained region is tested against every other
//! retained region, O(n^2) intersection calls with no spatial index;
//! accepted for simplicity at choropleth scales.

use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::ports::{Intersects, Region};

/// One region's discovered neighbors, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub name: String,
    pub neighbors: Vec<String>,
}

/// Ordered adjacency model: entries sorted from most neighbors to least.
///
/// The order is part of the contract. The greedy colorer walks entries
/// front to back, so the most-constrained regions are colored while the
/// palette is still unconstrained. Ties keep their relative input order.
///
/// Symmetry is NOT enforced: each entry's neighbor list is computed
/// independently, and with imprecise GIS borders it is normal for region
/// A to list B while B's list omits A.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyModel {
    entries: Vec<AdjacencyEntry>,
}

impl AdjacencyModel {
    /// Build a model from raw entries, applying the descending-degree
    /// sort. The sort is stable, so equal-degree entries preserve the
    /// order the caller supplied.
    pub fn new(mut entries: Vec<AdjacencyEntry>) -> Self {
        entries.sort_by_key(|e| Reverse(e.neighbors.len()));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AdjacencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry> {
        self.entries.iter()
    }

    /// Neighbor list for a region, if the region is in the model.
    pub fn neighbors_of(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.neighbors.as_slice())
    }

    /// Largest neighbor count in the model. With the descending order
    /// this is the first entry's degree.
    pub fn max_degree(&self) -> usize {
        self.entries.first().map_or(0, |e| e.neighbors.len())
    }

    /// Palette size that makes greedy coloring always succeed: at each
    /// step at most `max_degree` already-colored neighbors can conflict,
    /// so `max_degree + 1` colors leave one free (pigeonhole).
    pub fn sufficient_palette_len(&self) -> usize {
        self.max_degree() + 1
    }
}

impl<'a> IntoIterator for &'a AdjacencyModel {
    type Item = &'a AdjacencyEntry;
    type IntoIter = std::slice::Iter<'a, AdjacencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build the ordered adjacency model for a collection of named regions.
///
/// Records are taken in input order. A record is skipped when its name is
/// empty or already seen (first occurrence of a duplicate name wins; a
/// deliberate simplification, not a data-quality guarantee). Each retained
/// region is then tested against every other retained region, giving a
/// deduplicated neighbor list in discovery order with no self-adjacency.
///
/// When `verbose` is set, each discovered pair is printed to stdout as
/// `<name1> intersects <name2>`, one direction per discovery. Diagnostic
/// only; the result is identical either way.
///
/// Empty input yields an empty model.
pub fn build_adjacency<G, I>(records: I, verbose: bool) -> AdjacencyModel
where
    G: Intersects,
    I: IntoIterator<Item = Region<G>>,
{
    let mut regions: Vec<Region<G>> = Vec::new();
    for record in records {
        if record.name.is_empty() || regions.iter().any(|r| r.name == record.name) {
            continue;
        }
        regions.push(record);
    }

    let mut entries = Vec::with_capacity(regions.len());
    for (i, r1) in regions.iter().enumerate() {
        let mut neighbors = Vec::new();
        for (j, r2) in regions.iter().enumerate() {
            if i == j {
                continue;
            }
            if r1.geometry.intersects(&r2.geometry) {
                debug!("{} intersects {}", r1.name, r2.name);
                if verbose {
                    println!("{} intersects {}", r1.name, r2.name);
                }
                neighbors.push(r2.name.clone());
            }
        }
        entries.push(AdjacencyEntry {
            name: r1.name.clone(),
            neighbors,
        });
    }

    AdjacencyModel::new(entries)
}
