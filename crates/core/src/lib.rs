//! Hexagonal tile grids with hit-testing and weighted pathfinding. This
//! crate holds all the grid logic, and none of the presentation: it tells
//! you where every hexagon is on screen, which one a pointer position falls
//! in, and which tiles to walk through to get from one to another. Drawing
//! is up to you.
//!
//! ```
//! use hexpath::{Grid, GridConfig, Point2, TilePoint};
//!
//! let grid = Grid::build(GridConfig::default()).unwrap();
//! if let Some(tile) = grid.hit_test(Point2::new(400.0, 300.0)) {
//!     let path = grid
//!         .find_path(TilePoint::new(0, 0), tile.position())
//!         .unwrap();
//!     println!("{:?}", path);
//! }
//! ```
//!
//! See [GridConfig] for details on how the grid can be customized.

mod config;
mod error;
mod grid;
mod hex;
mod path;
mod trig;
mod util;

pub use crate::{
    config::{GridConfig, Seed, TileCount, TileSizing, Viewport},
    error::GridError,
    grid::{Grid, Layout, Tile, TilePoint, TilePointIndexSet, TilePointSet},
    hex::{EdgeFn, Hexagon, Orientation},
    path::{PathFinder, PathStats},
    trig::TrigTable,
    util::unit::{Point2, Rect, Vector2},
};
