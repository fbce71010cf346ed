//! Geometry port
//!
//! The polygon engine is an external collaborator. The core needs exactly
//! one thing from it: a binary intersection predicate. Keeping geometry
//! behind this trait keeps the domain logic free of any GIS dependency.

/// Spatial intersection predicate over an opaque geometry type.
///
/// Implementations should treat shared borders as intersecting. The
/// predicate is not required to be symmetric: the adjacency builder
/// evaluates each ordered pair independently and preserves whatever the
/// implementation reports, so `a.intersects(b)` without `b.intersects(a)`
/// yields a one-directional adjacency. Real GIS data with imprecise
/// borders is expected to produce such artifacts.
pub trait Intersects {
    fn intersects(&self, other: &Self) -> bool;
}

/// A named map region backed by an opaque geometry.
///
/// Names identify regions throughout the pipeline; the empty string is
/// not a valid name and records carrying it are dropped by the builder.
#[derive(Debug, Clone)]
pub struct Region<G> {
    pub name: String,
    pub geometry: G,
}

impl<G> Region<G> {
    pub fn new(name: impl Into<String>, geometry: G) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }
}
