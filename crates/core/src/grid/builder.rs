use crate::{
    config::{GridConfig, TileSizing},
    error::GridError,
    grid::{Grid, Layout, Tile, TilePoint},
    hex::Hexagon,
    timed,
    trig::TrigTable,
    util::{
        fit_count,
        unit::{Point2, Vector2},
    },
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::convert::TryFrom;

/// Upper bound on `columns * rows`, i.e. the size of the position table
const MAX_POSITIONS: usize = 1 << 22;

/// Tile counts for the two families of lines along the major axis. Family 0
/// holds the even major lines (starting flush with the edge), family 1 the
/// odd ones (shifted half a tile along the minor axis).
#[derive(Copy, Clone, Debug, PartialEq)]
struct Families {
    /// Number of lines in each family, along the major axis
    major: [usize; 2],
    /// Number of tiles in each line, along the minor axis
    minor: [usize; 2],
}

impl Families {
    /// Count how many tiles of a fixed radius fit in a `major` by `minor`
    /// area, without any tile crossing the edge
    fn fit(radius: f64, apothem: f64, major: f64, minor: f64) -> Self {
        Self {
            major: [
                fit_count(major + radius, 3.0 * radius),
                fit_count(major - 0.5 * radius, 3.0 * radius),
            ],
            minor: [
                fit_count(minor, 2.0 * apothem),
                fit_count(minor - apothem, 2.0 * apothem),
            ],
        }
    }

    /// Split a requested number of lines and tiles per line between the two
    /// families
    fn split(major: usize, minor: usize) -> Self {
        Self {
            major: [(major + 1) / 2, major / 2],
            minor: [minor, minor],
        }
    }

    fn is_populated(&self, family: usize) -> bool {
        self.major[family] > 0 && self.minor[family] > 0
    }

    /// Number of distinct positions along each axis
    fn dimensions(&self) -> (usize, usize) {
        if !self.is_populated(0) {
            return (0, 0);
        }
        let minor = if self.is_populated(1) {
            self.minor[0].max(self.minor[1])
        } else {
            self.minor[0]
        };
        (self.major[0] + self.major[1], minor)
    }

    /// Size of the area covered by all tiles, as (major, minor)
    fn extent(&self, radius: f64, apothem: f64) -> (f64, f64) {
        let mut major: f64 = 0.0;
        let mut minor: f64 = 0.0;
        for family in 0..2 {
            if !self.is_populated(family) {
                continue;
            }
            let (start_major, start_minor) = start(family, radius, apothem);
            let last_major = (self.major[family] - 1) as f64 * 3.0 * radius;
            let last_minor = (self.minor[family] - 1) as f64 * 2.0 * apothem;
            major = major.max(start_major + last_major + radius);
            minor = minor.max(start_minor + last_minor + apothem);
        }
        (major, minor)
    }
}

/// (major, minor) center of the first tile in a family, relative to the
/// corner of the footprint
fn start(family: usize, radius: f64, apothem: f64) -> (f64, f64) {
    if family == 0 {
        (radius, apothem)
    } else {
        (2.5 * radius, 2.0 * apothem)
    }
}

/// A container for building a new grid. Placement happens in two passes:
/// first every tile is created and given a cost, then each tile is linked
/// to its neighbors. Linking needs to look up other tiles by position, which
/// is only possible once they all exist.
pub(super) struct GridBuilder<'a> {
    config: &'a GridConfig,
    layout: Layout,
    table: TrigTable,
    rng: Pcg64,
}

impl<'a> GridBuilder<'a> {
    /// The config should already be validated
    pub fn new(config: &'a GridConfig) -> Self {
        Self {
            config,
            layout: config.layout,
            table: TrigTable::new(),
            rng: Pcg64::seed_from_u64(config.seed.to_u64()),
        }
    }

    pub fn build(mut self) -> anyhow::Result<Grid> {
        let viewport = self.config.viewport;
        // Viewport size along the (major, minor) axes
        let (span_major, span_minor) =
            self.layout.swap_axes(viewport.width, viewport.height);
        let cos30 = self.table.cos_deg(30);

        let (radius, families) = match self.config.sizing()? {
            TileSizing::Radius(radius) => {
                let apothem = radius * cos30;
                let families =
                    Families::fit(radius, apothem, span_major, span_minor);
                (radius, families)
            }
            TileSizing::Count(count) => {
                let (major, minor) =
                    self.layout.swap_axes(count.columns, count.rows);
                let (major, minor) = (major as f64, minor as f64);
                // The odd lines stick out an extra half tile on the minor
                // axis, but only if there are any
                let minor_halves =
                    2.0 * minor + if major > 1.0 { 1.0 } else { 0.0 };
                let radius = (span_major / (1.5 * major + 0.5))
                    .min(span_minor / (cos30 * minor_halves));
                let families =
                    Families::split(major as usize, minor as usize);
                (radius, families)
            }
        };
        let apothem = radius * cos30;

        let (len_major, len_minor) = families.dimensions();
        let (columns, rows) = self.layout.swap_axes(len_major, len_minor);
        check_dimensions(columns, rows)?;
        let (extent_major, extent_minor) = families.extent(radius, apothem);
        let (offset_x, offset_y) = self.layout.swap_axes(
            (span_major - extent_major) / 2.0,
            (span_minor - extent_minor) / 2.0,
        );
        let offset = Vector2::new(offset_x, offset_y);
        info!(
            "Laying out {} grid: radius {:.2}, {}x{} positions, \
            families {:?}x{:?}",
            self.layout, radius, columns, rows, families.major, families.minor
        );

        let (tiles, index) = timed!("Tile placement", {
            let mut tiles = Vec::new();
            let mut index = vec![None; columns * rows];
            for major in 0..len_major {
                let (family, k) = (major % 2, major / 2);
                let (start_major, start_minor) =
                    start(family, radius, apothem);
                for j in 0..families.minor[family] {
                    let (x, y) = self.layout.swap_axes(
                        start_major + k as f64 * 3.0 * radius,
                        start_minor + j as f64 * 2.0 * apothem,
                    );
                    let (column, row) = self.layout.swap_axes(major, j);
                    let position = TilePoint::new(column as u16, row as u16);
                    // Lay out against the footprint corner, then shift the
                    // whole footprint to the middle of the viewport
                    let mut hexagon = Hexagon::new(
                        &self.table,
                        radius,
                        Point2::new(x, y),
                        self.layout.orientation(),
                    );
                    hexagon.translate(offset);
                    index[row * columns + column] = Some(tiles.len());
                    tiles.push(Tile {
                        position,
                        hexagon,
                        cost: self.random_cost(),
                        neighbors: Vec::new(),
                    });
                }
            }
            (tiles, index)
        });

        let mut grid = Grid {
            config: self.config.clone(),
            radius,
            // Both were checked to fit above
            columns: columns as u16,
            rows: rows as u16,
            tiles,
            index,
        };
        timed!("Neighbor linking", link_neighbors(&mut grid));
        info!("Built grid with {} tiles", grid.len());
        Ok(grid)
    }

    fn random_cost(&mut self) -> u8 {
        self.rng.gen_range(1..=self.config.max_cost())
    }
}

/// Make sure every position fits in a [TilePoint], and that the position
/// table has a sane size. Has to run before anything gets allocated.
fn check_dimensions(columns: usize, rows: usize) -> anyhow::Result<()> {
    let out_of_range = |range: String| -> anyhow::Error {
        GridError::OutOfRange {
            value: format!("{}x{}", columns, rows),
            range,
        }
        .into()
    };
    if u16::try_from(columns).is_err() || u16::try_from(rows).is_err() {
        return Err(out_of_range("u16 grid dimensions".into()));
    }
    match columns.checked_mul(rows) {
        Some(positions) if positions <= MAX_POSITIONS => Ok(()),
        _ => Err(out_of_range(format!("at most {} positions", MAX_POSITIONS))),
    }
}

/// Store the index of every adjacent tile on each tile
fn link_neighbors(grid: &mut Grid) {
    let layout = grid.layout();
    let neighbors: Vec<Vec<usize>> = grid
        .tiles
        .iter()
        .map(|tile| {
            let pos = tile.position;
            layout
                .neighbor_candidates(pos.column as i32, pos.row as i32)
                .iter()
                .filter_map(|&(column, row)| grid.index_of(column, row))
                .collect()
        })
        .collect();
    for (tile, neighbors) in grid.tiles.iter_mut().zip(neighbors) {
        tile.neighbors = neighbors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_fit() {
        // Radius 10, so apothem ~8.66. 100 wide fits family 0 at 0, 30, 60
        // (each 20 wide) and family 1 at 15, 45 (ending at 35, 65, 95)
        let apothem = 10.0 * TrigTable::new().cos_deg(30);
        let families = Families::fit(10.0, apothem, 100.0, 50.0);
        assert_eq!(families.major, [3, 3]);
        // 50 / 17.32 = 2.88; (50 - 8.66) / 17.32 = 2.38
        assert_eq!(families.minor, [2, 2]);
        assert_eq!(families.dimensions(), (6, 2));

        // Too small for anything
        let families = Families::fit(10.0, apothem, 15.0, 50.0);
        assert_eq!(families.major, [0, 0]);
        assert_eq!(families.dimensions(), (0, 0));
    }

    #[test]
    fn test_split() {
        let families = Families::split(5, 4);
        assert_eq!(families.major, [3, 2]);
        assert_eq!(families.minor, [4, 4]);
        assert_eq!(families.dimensions(), (5, 4));

        let families = Families::split(1, 4);
        assert_eq!(families.major, [1, 0]);
        assert_eq!(families.dimensions(), (1, 4));
    }

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(0, 0).is_ok());
        assert!(check_dimensions(2048, 2048).is_ok());

        let err = check_dimensions(133333, 5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::OutOfRange {
                value: "133333x5".into(),
                range: "u16 grid dimensions".into(),
            })
        );

        // Each axis fits, but the table would be enormous
        let err = check_dimensions(65535, 65535).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_extent() {
        let apothem = 10.0 * TrigTable::new().cos_deg(30);
        let (major, minor) = Families::split(5, 4).extent(10.0, apothem);
        // 1.5 * 5 + 0.5 radii along the major axis
        assert_approx_eq!(major, 80.0);
        // 2 * 4 + 1 apothems along the minor axis
        assert_approx_eq!(minor, 9.0 * apothem);

        let (major, minor) = Families::split(1, 4).extent(10.0, apothem);
        assert_approx_eq!(major, 20.0);
        assert_approx_eq!(minor, 8.0 * apothem);
    }
}
