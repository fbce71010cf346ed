//! Greedy Colorer
//!
//! Walks the adjacency model in its most-constrained-first order and
//! commits the first palette color no already-colored neighbor holds.
//! Regions later in the order are not yet colored and therefore never
//! constrain an earlier region. No backtracking: a region that exhausts
//! the palette fails the whole run with its name, and the caller retries
//! with a different seed or a larger palette.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::adjacency::AdjacencyModel;
use crate::errors::{ChromapError, Result};

/// A finite collection of color tokens, guaranteed non-empty.
///
/// Tokens are opaque to the core beyond equality; the renderer supplies
/// values meaningful to it (hex strings, RGB triples, indices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C: Clone + PartialEq> Palette<C> {
    /// Callers are expected to supply distinct tokens; duplicates are
    /// not rejected, they only waste candidate slots.
    pub fn new(colors: Vec<C>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChromapError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[C] {
        &self.colors
    }
}

/// Completed region-to-color mapping produced by a coloring run.
///
/// Entries are written once and never revised; a run either finishes
/// every region or fails without returning a partial assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorAssignment<C> {
    colors: HashMap<String, C>,
}

impl<C: Clone + PartialEq> ColorAssignment<C> {
    fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    fn insert(&mut self, name: String, color: C) {
        self.colors.insert(name, color);
    }

    pub fn get(&self, name: &str) -> Option<&C> {
        self.colors.get(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &C)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// Number of distinct tokens actually used.
    pub fn color_count(&self) -> usize {
        let mut distinct: Vec<&C> = Vec::new();
        for color in self.colors.values() {
            if !distinct.iter().any(|&c| c == color) {
                distinct.push(color);
            }
        }
        distinct.len()
    }

    /// Validate that no region shares a color with any region on its
    /// neighbor list. Directional, like the model itself: each entry is
    /// checked against its own list only.
    pub fn is_proper(&self, model: &AdjacencyModel) -> bool {
        model.iter().all(|entry| match self.get(&entry.name) {
            None => false,
            Some(own) => entry
                .neighbors
                .iter()
                .all(|n| self.get(n).map_or(true, |c| c != own)),
        })
    }
}

/// Greedily color every region in the model with an injected RNG.
///
/// Per region, a fresh copy of the palette is shuffled and the first
/// candidate no already-assigned neighbor holds is committed. The
/// caller's palette is never reordered. Fails with
/// [`ChromapError::NoColorFor`] naming the first region whose candidates
/// are all taken; assignments made before the failure are discarded with
/// the error.
pub fn color_regions_with<C, R>(
    model: &AdjacencyModel,
    palette: &Palette<C>,
    rng: &mut R,
) -> Result<ColorAssignment<C>>
where
    C: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut assignment = ColorAssignment::empty();
    for entry in model.iter() {
        let mut candidates = palette.colors().to_vec();
        candidates.shuffle(rng);

        let chosen = candidates.into_iter().find(|color| {
            entry
                .neighbors
                .iter()
                .all(|n| assignment.get(n).map_or(true, |c| c != color))
        });

        match chosen {
            Some(color) => {
                debug!("colored {} ({} neighbors)", entry.name, entry.neighbors.len());
                assignment.insert(entry.name.clone(), color);
            }
            None => return Err(ChromapError::NoColorFor(entry.name.clone())),
        }
    }
    Ok(assignment)
}

/// [`color_regions_with`] using the thread-local RNG.
pub fn color_regions<C>(model: &AdjacencyModel, palette: &Palette<C>) -> Result<ColorAssignment<C>>
where
    C: Clone + PartialEq,
{
    color_regions_with(model, palette, &mut rand::thread_rng())
}

/// [`color_regions_with`] seeded for reproducible output.
pub fn color_regions_seeded<C>(
    model: &AdjacencyModel,
    palette: &Palette<C>,
    seed: u64,
) -> Result<ColorAssignment<C>>
where
    C: Clone + PartialEq,
{
    let mut rng = StdRng::seed_from_u64(seed);
    color_regions_with(model, palette, &mut rng)
}
