mod builder;
mod data_structure;
mod layout;
mod tile;

pub use crate::grid::{
    data_structure::{TilePointIndexSet, TilePointSet},
    layout::Layout,
    tile::{Tile, TilePoint},
};
use crate::{
    error::GridError, grid::builder::GridBuilder, path::PathFinder, timed,
    util::unit::Point2, GridConfig,
};
use anyhow::Context;
use fnv::FnvBuildHasher;
use log::info;
use validator::Validate;

/// A fully built grid of hexagonal tiles. Holds the tiles, as well as the
/// config that was used to build them.
///
/// Tiles live in a flat list, and a dense (column, row) table maps positions
/// into that list. Not every (column, row) pair has a tile: when the odd
/// lines are one tile shorter than the even ones, the last slot of each odd
/// line stays empty. Looking up an empty slot behaves the same as looking up
/// a position past the edge of the grid.
#[derive(Clone, Debug)]
pub struct Grid {
    config: GridConfig,
    radius: f64,
    columns: u16,
    rows: u16,
    tiles: Vec<Tile>,
    /// Row-major, `columns * rows` long
    index: Vec<Option<usize>>,
}

impl Grid {
    /// Build a new grid from the given config. Fails if the config is
    /// invalid, including if it doesn't give exactly one of tile radius and
    /// tile count. A viewport that's too small to hold a single tile is
    /// **not** an error, you just get an empty grid.
    pub fn build(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building grid with config {:#?}", config);
        config.validate().context("invalid config")?;
        timed!(
            "Grid construction",
            log::Level::Info,
            GridBuilder::new(&config).build()
        )
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    /// Side length of every tile, in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of columns. Some columns may be one tile shorter than others.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of rows. Some rows may be one tile shorter than others.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, ordered by major line then by position along the line
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get the tile at a position, or `None` if there is no tile there
    pub fn get(&self, pos: TilePoint) -> Option<&Tile> {
        self.index_of(pos.column as i32, pos.row as i32)
            .map(|index| &self.tiles[index])
    }

    /// Get the tile at a position. Fails with [GridError::OutOfRange] if
    /// there is no tile there.
    pub fn tile(&self, pos: TilePoint) -> anyhow::Result<&Tile> {
        Ok(&self.tiles[self.index(pos)?])
    }

    /// Get every tile adjacent to the given position, in neighbor rule order
    pub fn neighbors(
        &self,
        pos: TilePoint,
    ) -> anyhow::Result<impl Iterator<Item = &Tile>> {
        let tile = self.tile(pos)?;
        Ok(tile
            .neighbor_indexes()
            .iter()
            .map(move |&index| &self.tiles[index]))
    }

    /// Change the cost of a tile. Set it to 0 to block the tile.
    pub fn set_cost(
        &mut self,
        pos: TilePoint,
        cost: u8,
    ) -> anyhow::Result<()> {
        let index = self.index(pos)?;
        self.tiles[index].cost = cost;
        Ok(())
    }

    /// Find the tile that contains a point in screen space. Points on a
    /// shared border match whichever of the tiles comes first in
    /// [Self::tiles]. Returns `None` if the point isn't in any tile.
    pub fn hit_test(&self, point: Point2) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|tile| tile.hexagon().contains_point(point))
    }

    /// Get every tile within `depth` steps of a position, not counting the
    /// position itself. Tiles are ordered by when they were discovered: the
    /// immediate neighbors come first (in neighbor rule order), then the
    /// tiles found while expanding those, and so on. Blocked tiles are
    /// included, this only looks at adjacency.
    pub fn neighbors_within(
        &self,
        pos: TilePoint,
        depth: usize,
    ) -> anyhow::Result<TilePointIndexSet> {
        let mut found =
            TilePointIndexSet::with_hasher(FnvBuildHasher::default());
        if depth == 0 {
            // Still reject bad positions
            self.index(pos)?;
            return Ok(found);
        }

        found.extend(self.neighbors(pos)?.map(Tile::position));
        for _ in 1..depth {
            // Only expand what was there at the start of this round
            let len = found.len();
            for i in 0..len {
                let current = found[i];
                found.extend(self.neighbors(current)?.map(Tile::position));
            }
            // Nothing new was reached, so deeper rounds can't add anything
            if found.len() == len {
                break;
            }
        }
        found.shift_remove(&pos);
        Ok(found)
    }

    /// Find the cheapest-looking route between two tiles. See [PathFinder]
    /// for the details. Returns an empty path if there is no route.
    pub fn find_path(
        &self,
        start: TilePoint,
        goal: TilePoint,
    ) -> anyhow::Result<Vec<TilePoint>> {
        PathFinder::new(self).find(start, goal)
    }

    /// Look up the list index for a position. Takes signed values so that
    /// neighbor candidates past the edge can be checked directly.
    pub(crate) fn index_of(&self, column: i32, row: i32) -> Option<usize> {
        let (columns, rows) = (self.columns as i32, self.rows as i32);
        if (0..columns).contains(&column) && (0..rows).contains(&row) {
            self.index[(row * columns + column) as usize]
        } else {
            None
        }
    }

    /// Like [Self::index_of], but errors if there's no tile at the position
    pub(crate) fn index(&self, pos: TilePoint) -> anyhow::Result<usize> {
        self.index_of(pos.column as i32, pos.row as i32)
            .ok_or_else(|| {
                GridError::OutOfRange {
                    value: pos.to_string(),
                    range: format!("{}x{} grid", self.columns, self.rows),
                }
                .into()
            })
    }
}
