//! chromap: greedy graph coloring for map regions
//!
//! Builds an adjacency model from named polygon geometries (which regions
//! touch which) and assigns each region a palette color that no geometric
//! neighbor shares, so adjacent areas of a choropleth map stay visually
//! distinct.
//!
//! The pipeline is one-directional: geometry records feed
//! [`build_adjacency`], whose ordered model feeds the greedy colorer.
//! Regions with the most neighbors are colored first. The colorer is a
//! best-effort heuristic with no backtracking: a run that exhausts the
//! palette fails with the offending region's name instead of returning a
//! mis-colored map, and the caller recovers by rerunning with another
//! seed or a larger palette.
//!
//! Geometry stays behind the [`Intersects`] port; any engine that can
//! answer "do these two polygons touch" plugs in.

pub mod adjacency;
pub mod coloring;
pub mod errors;
pub mod ports;

pub use adjacency::{build_adjacency, AdjacencyEntry, AdjacencyModel};
pub use coloring::{
    color_regions, color_regions_seeded, color_regions_with, ColorAssignment, Palette,
};
pub use errors::{ChromapError, Result};
pub use ports::{Intersects, Region};
