mod seed;

pub use crate::config::seed::Seed;
use crate::{error::GridError, grid::Layout};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a grid. Two grids built with the same config
/// will always be identical, including the tile costs.
///
/// Exactly one of [tile_radius](Self::tile_radius) and
/// [tile_count](Self::tile_count) must be given. [GridConfig::default] uses
/// a tile count, but when deserializing, both start out empty. A config file
/// has to pick one itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// RNG seed used to assign tile costs. See [Seed] for the accepted
    /// formats.
    pub seed: Seed,

    /// Which way the tiles are oriented, and which neighbor rule applies.
    pub layout: Layout,

    /// Side length (= circumradius) of every tile, in pixels. The number of
    /// tiles is however many fit in the viewport.
    #[serde(default)]
    #[validate(range(min = 1.0))]
    pub tile_radius: Option<f64>,

    /// Upper bound (inclusive) of the random cost assigned to each tile. The
    /// lower bound is always 1. If not given, this depends on the layout,
    /// see [Layout::default_max_cost].
    #[validate(range(min = 1))]
    pub max_cost: Option<u8>,

    /// Area that the grid has to fit into, in pixels.
    #[validate]
    pub viewport: Viewport,

    /// Number of tile columns and rows to fit into the viewport. The radius
    /// is the largest one that makes them fit.
    #[serde(default)]
    pub tile_count: Option<TileCount>,
}

/// Pixel dimensions of the drawing area
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Viewport {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
}

/// Desired number of tiles along each screen axis
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct TileCount {
    #[validate(range(min = 1))]
    pub columns: u16,
    #[validate(range(min = 1))]
    pub rows: u16,
}

/// How tile size gets decided. Derived from a config by
/// [GridConfig::sizing].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TileSizing {
    Radius(f64),
    Count(TileCount),
}

impl GridConfig {
    /// Figure out how tiles should be sized. Fails if the config gives both a
    /// radius and a count, or neither, or if the count is invalid.
    pub fn sizing(&self) -> anyhow::Result<TileSizing> {
        match (self.tile_radius, self.tile_count) {
            (Some(radius), None) => Ok(TileSizing::Radius(radius)),
            (None, Some(count)) => {
                count.validate()?;
                Ok(TileSizing::Count(count))
            }
            (None, None) => Err(GridError::MissingSize.into()),
            (Some(_), Some(_)) => Err(GridError::AmbiguousSize.into()),
        }
    }

    /// Upper bound of the tile cost range
    pub fn max_cost(&self) -> u8 {
        self.max_cost
            .unwrap_or_else(|| self.layout.default_max_cost())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: Seed::random(),

            layout: Layout::Horizontal,
            tile_radius: None,
            max_cost: None,
            viewport: Viewport {
                width: 800.0,
                height: 600.0,
            },
            tile_count: Some(TileCount {
                columns: 24,
                rows: 12,
            }),
        }
    }
}
