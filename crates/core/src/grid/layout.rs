use crate::hex::Orientation;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How tiles are arranged in the grid.
///
/// Both layouts stack tiles in straight lines along one screen axis (the
/// **minor** axis), and zig-zag along the other (the **major** axis). Every
/// other line along the major axis is shifted half a tile along the minor
/// axis, so each line nests into the next.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Layout {
    /// Flat-top tiles. Columns run down the screen in straight lines, and
    /// odd columns are shifted down by half a tile.
    Horizontal,
    /// Pointy-top tiles. Rows run across the screen in straight lines, and
    /// odd rows are shifted right by half a tile.
    Vertical,
}

impl Layout {
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Horizontal => Orientation::FlatTop,
            Self::Vertical => Orientation::PointyTop,
        }
    }

    /// Upper bound of the random tile cost when the config doesn't give one
    pub fn default_max_cost(self) -> u8 {
        match self {
            Self::Horizontal => 5,
            Self::Vertical => 4,
        }
    }

    /// Map a (major, minor) pair to a (column, row) pair, or vice versa. The
    /// mapping is its own inverse.
    pub(super) fn swap_axes<T>(self, major: T, minor: T) -> (T, T) {
        match self {
            Self::Horizontal => (major, minor),
            Self::Vertical => (minor, major),
        }
    }

    /// The 6 positions that would be adjacent to the given position if the
    /// grid were unbounded. Some of them may be off the grid (including
    /// negative), so the caller needs to filter them. The order here is the
    /// order that neighbors get stored and searched in.
    pub(super) fn neighbor_candidates(
        self,
        column: i32,
        row: i32,
    ) -> [(i32, i32); 6] {
        let (x, y) = (column, row);
        match self {
            Self::Horizontal => {
                // Odd columns sit half a tile lower, so their side
                // neighbors are one row further down
                let shift = y + x % 2 - 1;
                [
                    (x, y - 1),
                    (x, y + 1),
                    (x - 1, shift),
                    (x - 1, shift + 1),
                    (x + 1, shift),
                    (x + 1, shift + 1),
                ]
            }
            Self::Vertical => {
                // Odd rows sit half a tile further right
                let diagonal = if y % 2 == 0 { x - 1 } else { x + 1 };
                [
                    (x, y - 1),
                    (x, y + 1),
                    (x - 1, y),
                    (x + 1, y),
                    (diagonal, y - 1),
                    (diagonal, y + 1),
                ]
            }
        }
    }
}
