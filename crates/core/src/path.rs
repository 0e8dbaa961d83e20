//! Weighted A* search over a [Grid].
//!
//! Stepping onto a tile costs 10 times that tile's cost. The heuristic is the
//! straight-line distance between (column, row) positions, which is small
//! next to the step costs, so the search leans towards cheap tiles more than
//! towards the goal. The result is the cheapest-looking route, not always the
//! cheapest one.

use crate::grid::{Grid, TilePoint};
use log::debug;

/// Each step costs this many times the cost of the tile being entered
const STEP_MULTIPLIER: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NodeState {
    Unseen,
    Open,
    Closed,
}

/// Search bookkeeping for one tile. Kept outside the grid, so that a search
/// never touches the tiles themselves.
#[derive(Copy, Clone, Debug)]
struct SearchNode {
    /// Cost of the best known route from the start
    g: u32,
    /// Heuristic distance to the goal
    h: f64,
    /// `g + h`
    f: f64,
    /// Index of the tile we came from on the best known route
    predecessor: Option<usize>,
    state: NodeState,
}

impl SearchNode {
    const UNSEEN: Self = Self {
        g: 0,
        h: 0.0,
        f: 0.0,
        predecessor: None,
        state: NodeState::Unseen,
    };
}

/// Numbers from the last search, mostly for logging
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathStats {
    /// Number of tiles moved to the closed set
    pub expanded: usize,
    /// Total cost of the path found, in step units. 0 if there was no path.
    pub cost: u32,
    /// Number of tiles in the path, including both ends
    pub length: usize,
}

/// Runs searches over a grid. The grid is only borrowed immutably, so any
/// number of finders can search the same grid at once. A single finder can
/// be reused for multiple searches; each search starts from scratch.
#[derive(Debug)]
pub struct PathFinder<'a> {
    grid: &'a Grid,
    nodes: Vec<SearchNode>,
    open: Vec<usize>,
    closed: Vec<usize>,
    stats: PathStats,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            nodes: Vec::new(),
            open: Vec::new(),
            closed: Vec::new(),
            stats: PathStats::default(),
        }
    }

    /// Stats for the most recent call to [Self::find]
    pub fn stats(&self) -> PathStats {
        self.stats
    }

    /// Find a route from `start` to `goal`. The path includes both ends, and
    /// each tile in it is adjacent to the next. Blocked tiles (cost 0) are
    /// never entered. Returns an empty path if the goal can't be reached,
    /// and `[start]` if the two are the same. Fails only if either position
    /// isn't in the grid.
    pub fn find(
        &mut self,
        start: TilePoint,
        goal: TilePoint,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let start_index = self.grid.index(start)?;
        let goal_index = self.grid.index(goal)?;
        self.reset();

        if start_index == goal_index {
            self.stats.length = 1;
            return Ok(vec![start]);
        }

        let h = start.distance_to(goal);
        self.nodes[start_index] = SearchNode {
            g: 0,
            h,
            f: h,
            predecessor: None,
            state: NodeState::Open,
        };
        self.open.push(start_index);

        let grid = self.grid;
        let tiles = grid.tiles();
        while let Some(current) = self.pop_best() {
            self.nodes[current].state = NodeState::Closed;
            self.closed.push(current);
            if current == goal_index {
                break;
            }

            let current_g = self.nodes[current].g;
            for &neighbor in tiles[current].neighbor_indexes() {
                let tile = &tiles[neighbor];
                let node = &mut self.nodes[neighbor];
                if !tile.is_passable() || node.state == NodeState::Closed {
                    continue;
                }

                let g = current_g + STEP_MULTIPLIER * tile.cost() as u32;
                match node.state {
                    NodeState::Unseen => {
                        let h = tile.position().distance_to(goal);
                        *node = SearchNode {
                            g,
                            h,
                            f: g as f64 + h,
                            predecessor: Some(current),
                            state: NodeState::Open,
                        };
                        self.open.push(neighbor);
                    }
                    // Found a cheaper way here, update it in place
                    NodeState::Open if g < node.g => {
                        node.g = g;
                        node.f = g as f64 + node.h;
                        node.predecessor = Some(current);
                    }
                    _ => {}
                }
            }
        }

        self.stats.expanded = self.closed.len();
        let path = if self.closed.last() == Some(&goal_index) {
            self.stats.cost = self.nodes[goal_index].g;
            self.trace_back(goal_index)
        } else {
            Vec::new()
        };
        self.stats.length = path.len();
        debug!("Path from {} to {}: {:?}", start, goal, self.stats);
        Ok(path)
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.resize(self.grid.len(), SearchNode::UNSEEN);
        self.open.clear();
        self.closed.clear();
        self.stats = PathStats::default();
    }

    /// Remove and return the open tile with the lowest `f`. The last entry
    /// is the initial candidate, and an earlier entry only replaces it if
    /// its `f` is strictly lower, so ties go to the earliest such entry
    /// after the last one. The winner is swapped with the last entry before
    /// removal, which reorders the open list.
    fn pop_best(&mut self) -> Option<usize> {
        let last = self.open.len().checked_sub(1)?;
        let mut best = last;
        for i in 0..last {
            if self.nodes[self.open[i]].f < self.nodes[self.open[best]].f {
                best = i;
            }
        }
        Some(self.open.swap_remove(best))
    }

    /// Walk predecessors back from the goal to build the path
    fn trace_back(&self, goal_index: usize) -> Vec<TilePoint> {
        let tiles = self.grid.tiles();
        let mut path = vec![tiles[goal_index].position()];
        let mut current = goal_index;
        while let Some(previous) = self.nodes[current].predecessor {
            path.push(tiles[previous].position());
            current = previous;
        }
        path.reverse();
        path
    }
}
