use crate::hex::Hexagon;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Position of a tile in the grid, as a column and a row. Column 0 is the
/// leftmost, row 0 the topmost. Columns and rows zig-zag on every other
/// line, so which tiles are adjacent depends on the grid's
/// [Layout](crate::Layout).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", column, row)]
pub struct TilePoint {
    pub column: u16,
    pub row: u16,
}

impl TilePoint {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Straight-line distance to another point, measured in (column, row)
    /// units. Used as the pathfinding heuristic.
    pub fn distance_to(self, other: TilePoint) -> f64 {
        let dc = other.column as f64 - self.column as f64;
        let dr = other.row as f64 - self.row as f64;
        (dc * dc + dr * dr).sqrt()
    }
}

impl From<(u16, u16)> for TilePoint {
    fn from((column, row): (u16, u16)) -> Self {
        Self::new(column, row)
    }
}

/// A single cell of the grid: a hexagon on screen, plus the cost of moving
/// onto it. A cost of 0 means the tile is blocked and can never be part of
/// a path.
///
/// Tiles are only made by [Grid::build](crate::Grid::build). The only thing
/// that can change afterwards is the cost, via
/// [Grid::set_cost](crate::Grid::set_cost).
#[derive(Clone, Debug, Serialize)]
pub struct Tile {
    // These fields are pub(super) so they can be filled in by the builder
    pub(super) position: TilePoint,
    pub(super) hexagon: Hexagon,
    pub(super) cost: u8,

    /// Indexes of adjacent tiles in the grid's tile list, in the order the
    /// layout's neighbor rule produced them
    #[serde(skip)]
    pub(super) neighbors: Vec<usize>,
}

impl Tile {
    pub fn position(&self) -> TilePoint {
        self.position
    }

    pub fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    /// Cost of stepping onto this tile. 0 if blocked.
    pub fn cost(&self) -> u8 {
        self.cost
    }

    pub fn is_passable(&self) -> bool {
        self.cost > 0
    }

    pub(crate) fn neighbor_indexes(&self) -> &[usize] {
        &self.neighbors
    }
}
