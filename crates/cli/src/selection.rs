use hexpath::{Grid, Point2, TilePoint};
use log::debug;
use serde::Serialize;

/// How far out from the start tile the neighborhood reaches
pub const NEIGHBORHOOD_DEPTH: usize = 3;

/// Tracks which tile (if any) the user has picked as the start of a path.
/// Each click moves the selection along:
///
/// - No start yet: clicking a tile makes it the start
/// - Clicking the start again clears everything
/// - Clicking any other tile finds a path to it. The start stays selected,
///   so you can keep clicking to try different goals
///
/// Clicks that miss every tile, or land on a blocked tile, do nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<TilePoint>,
}

/// What happened as a result of one click
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    /// Click didn't land on a usable tile
    Ignored { point: Point2 },
    /// A start tile was picked
    Selected {
        start: TilePoint,
        neighborhood: Vec<TilePoint>,
    },
    /// The start tile was clicked again
    Cleared { start: TilePoint },
    /// A goal was picked. The path is empty if the goal is unreachable.
    Path {
        start: TilePoint,
        goal: TilePoint,
        path: Vec<TilePoint>,
    },
}

impl Selection {
    pub fn start(&self) -> Option<TilePoint> {
        self.start
    }

    /// Handle a click at a point in screen space
    pub fn click(
        &mut self,
        grid: &Grid,
        point: Point2,
    ) -> anyhow::Result<Outcome> {
        let tile = match grid.hit_test(point) {
            Some(tile) if tile.is_passable() => tile,
            Some(tile) => {
                let pos = tile.position();
                debug!("Click at {} hit blocked tile {}", point, pos);
                return Ok(Outcome::Ignored { point });
            }
            None => {
                debug!("Click at {} missed every tile", point);
                return Ok(Outcome::Ignored { point });
            }
        };

        let pos = tile.position();
        let outcome = match self.start {
            None => {
                self.start = Some(pos);
                let neighborhood = grid
                    .neighbors_within(pos, NEIGHBORHOOD_DEPTH)?
                    .into_iter()
                    .collect();
                Outcome::Selected {
                    start: pos,
                    neighborhood,
                }
            }
            Some(start) if start == pos => {
                self.start = None;
                Outcome::Cleared { start }
            }
            Some(start) => Outcome::Path {
                start,
                goal: pos,
                path: grid.find_path(start, pos)?,
            },
        };
        Ok(outcome)
    }
}
