use crate::grid::TilePoint;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::HashSet;

/// A set of tile points
pub type TilePointSet = HashSet<TilePoint, FnvBuildHasher>;
/// An ORDERED set of tile points. Iterates in insertion order, which is what
/// lets neighborhood queries report tiles in the order they were discovered.
pub type TilePointIndexSet = IndexSet<TilePoint, FnvBuildHasher>;
