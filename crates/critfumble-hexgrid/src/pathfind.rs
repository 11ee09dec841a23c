//! A* shortest paths over the hex grid.
//!
//! Every cell connects to its six neighbors at cost 1, and the hex distance
//! to the goal is the heuristic. Since a step never covers more than one unit
//! of hex distance, the heuristic is admissible and consistent, so the first
//! time the goal leaves the open set its path is shortest.
//!
//! All working state (open heap, score and parent maps) lives in the call.
//!
//! # Termination
//!
//! The grid has no edge. A goal sealed off inside a pocket of blocked cells
//! would leave a search from outside the pocket expanding forever, so next to
//! the search we flood the goal's region, one cell per expansion. The flood
//! stops as soon as it steps outside the bounding box of the blocked set
//! (the region is unbounded) or touches a cell the search already reached
//! (both ends share a region). If it runs dry first, the goal sits in a
//! finite pocket without the start and there is no path.
//!
//! The flood never does more work than the search, so the expansion cap in
//! [`PathfindOptions`] bounds both.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::blocked::{BlockedSet, CubeBounds};
use crate::coords::OffsetCoord;
use crate::topology::{hex_distance, hex_neighbors};
use crate::{Error, Path, Result};

/// Knobs for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfindOptions {
    /// Give up after expanding this many cells. `None` searches until the
    /// outcome is known.
    pub max_expansions: Option<usize>,
}

impl PathfindOptions {
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    pub const fn with_max_expansions(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }
}

/// Shortest path from `start` to `goal`, both included, avoiding `blocked`.
///
/// Returns `None` when either end is blocked or no route exists.
pub fn hex_pathfind(
    start: OffsetCoord,
    goal: OffsetCoord,
    blocked: &BlockedSet,
) -> Option<Path> {
    // Only a capped search can fail
    hex_pathfind_with(start, goal, blocked, &PathfindOptions::unbounded()).unwrap_or_default()
}

/// [`hex_pathfind`] with a search budget.
///
/// Fails with [`Error::SearchLimitExceeded`] if the budget runs out before
/// the outcome is known.
pub fn hex_pathfind_with(
    start: OffsetCoord,
    goal: OffsetCoord,
    blocked: &BlockedSet,
    options: &PathfindOptions,
) -> Result<Option<Path>> {
    if blocked.contains(&start) || blocked.contains(&goal) {
        trace!("Pathfind {} -> {}: endpoint blocked", start, goal);
        return Ok(None);
    }

    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut flood = GoalFlood::new(goal, blocked);
    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<OffsetCoord, u32> = HashMap::new();
    let mut came_from: HashMap<OffsetCoord, OffsetCoord> = HashMap::new();
    let mut seq = 0u64;
    let mut expansions = 0usize;

    let h = hex_distance(start, goal);
    open.push(OpenNode {
        f: h,
        h,
        seq,
        g: 0,
        cell: start,
    });
    g_score.insert(start, 0);

    while let Some(current) = open.pop() {
        // Superseded by a cheaper entry for the same cell
        if g_score
            .get(&current.cell)
            .is_some_and(|&g| current.g > g)
        {
            continue;
        }

        if current.cell == goal {
            let path = reconstruct(&came_from, start, goal);
            debug!(
                "Pathfind {} -> {}: {} steps after {} expansions",
                start,
                goal,
                path.len() - 1,
                expansions
            );
            return Ok(Some(path));
        }

        if let Some(limit) = options.max_expansions {
            if expansions >= limit {
                debug!(
                    "Pathfind {} -> {}: gave up after {} expansions",
                    start, goal, expansions
                );
                return Err(Error::SearchLimitExceeded { expansions });
            }
        }
        expansions += 1;

        for neighbor in hex_neighbors(current.cell) {
            if blocked.contains(&neighbor) {
                continue;
            }

            let tentative = current.g + 1;
            let improves = g_score
                .get(&neighbor)
                .map_or(true, |&known| tentative < known);

            if improves {
                came_from.insert(neighbor, current.cell);
                g_score.insert(neighbor, tentative);
                seq += 1;
                let h = hex_distance(neighbor, goal);
                open.push(OpenNode {
                    f: tentative + h,
                    h,
                    seq,
                    g: tentative,
                    cell: neighbor,
                });
            }
        }

        if let Some(fill) = flood.as_mut() {
            match fill.step(blocked, &g_score) {
                FloodStep::Pending => {}
                FloodStep::Open => flood = None,
                FloodStep::Sealed(size) => {
                    trace!(
                        "Pathfind {} -> {}: goal sealed in a pocket of {} cells",
                        start,
                        goal,
                        size
                    );
                    return Ok(None);
                }
            }
        }
    }

    debug!(
        "Pathfind {} -> {}: no route after {} expansions",
        start, goal, expansions
    );
    Ok(None)
}

/// Heap entry. Ordered so the max-heap pops the lowest `f` first, then the
/// lowest `h`, then the earliest pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    h: u32,
    seq: u64,
    g: u32,
    cell: OffsetCoord,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn reconstruct(
    came_from: &HashMap<OffsetCoord, OffsetCoord>,
    start: OffsetCoord,
    goal: OffsetCoord,
) -> Path {
    let mut path = vec![goal];
    let mut cursor = goal;
    // The start never gets a parent (no step improves on g = 0), so the
    // chain ends exactly there.
    while let Some(&prev) = came_from.get(&cursor) {
        path.push(prev);
        cursor = prev;
    }
    debug_assert_eq!(cursor, start, "parent chain must end at the start");
    path.reverse();
    path
}

/// Outcome of one flood step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloodStep {
    Pending,
    /// The goal's region is unbounded or already holds the start.
    Open,
    /// The goal's region is a finite pocket of this many cells without the
    /// start.
    Sealed(usize),
}

/// Breadth-first fill of the goal's region, advanced by the search.
#[derive(Debug)]
struct GoalFlood {
    bounds: CubeBounds,
    seen: HashSet<OffsetCoord>,
    queue: VecDeque<OffsetCoord>,
}

impl GoalFlood {
    /// `None` when there is nothing that could enclose the goal.
    fn new(goal: OffsetCoord, blocked: &BlockedSet) -> Option<Self> {
        Some(Self {
            bounds: blocked.cube_bounds()?,
            seen: HashSet::from([goal]),
            queue: VecDeque::from([goal]),
        })
    }

    /// Visit one cell. `reached` holds every cell the search has touched,
    /// the start included, so a pocket holding the start always ends `Open`.
    fn step(&mut self, blocked: &BlockedSet, reached: &HashMap<OffsetCoord, u32>) -> FloodStep {
        let Some(current) = self.queue.pop_front() else {
            return FloodStep::Sealed(self.seen.len());
        };
        if !self.bounds.contains(current) || reached.contains_key(&current) {
            return FloodStep::Open;
        }

        for neighbor in hex_neighbors(current) {
            if !blocked.contains(&neighbor) && self.seen.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }

        if self.queue.is_empty() {
            FloodStep::Sealed(self.seen.len())
        } else {
            FloodStep::Pending
        }
    }
}
