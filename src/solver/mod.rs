use core::fmt;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::pond::{CellId, HexDirection, Mark, Pond};
use crate::unique_queue::UniquePriorityQueue;

pub mod greedy;

/// How a candidate cell is reached from the cell the frog sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hop {
    /// A direct neighbour.
    Single,
    /// A neighbour of a neighbour, reached by jumping from a lily pad. `inline` is set when both
    /// legs of the jump point in the same direction.
    Double { inline: bool },
}

/// The cells the frog sat on, in order, together with the flies it ate along the way. Dead ends
/// the frog backed out of are part of the trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrogPath {
    pub trace: Vec<CellId>,
    pub flies_eaten: u32,
}

impl FrogPath {
    /// The cell the search finished on.
    pub fn end(&self) -> Option<CellId> {
        self.trace.last().copied()
    }
}

impl fmt::Display for FrogPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ate {} flies",
            self.trace.iter().join(" "),
            self.flies_eaten
        )
    }
}

pub trait PondSolver {
    /// Priority of moving onto `candidate`, lower being better. [None] means the frog may not
    /// land there. Marks are checked by the caller.
    fn score(&self, pond: &Pond, candidate: CellId, hop: Hop) -> Option<f64>;

    /// Picks the best cell to move to from `cell`, considering direct neighbours and, when
    /// `cell` is a lily pad, cells two hops away. Cells that are on the path or have been
    /// backed out of are never candidates.
    fn find_best(&self, pond: &Pond, cell: CellId) -> Option<CellId> {
        let mut queue = UniquePriorityQueue::new();
        let consider = |candidate: CellId, hop: Hop, queue: &mut UniquePriorityQueue<CellId>| {
            if queue.contains(&candidate) || pond.mark(candidate) != Mark::Clear {
                return;
            }
            if let Some(priority) = self.score(pond, candidate, hop) {
                queue.add(candidate, priority);
            }
        };
        for (_, neighbour) in pond.neighbours(cell) {
            consider(neighbour, Hop::Single, &mut queue);
        }
        if pond.is_lily_pad(cell) {
            for (i, neighbour) in pond.neighbours(cell) {
                for j in HexDirection::ALL {
                    if let Some(away) = pond.neighbour(neighbour, j) {
                        consider(away, Hop::Double { inline: i == j }, &mut queue);
                    }
                }
            }
        }
        queue.peek().ok().copied()
    }

    /// Walks from the start of the pond until an end cell is reached, always taking the move
    /// [find_best](Self::find_best) proposes and backtracking when there is none. Flies are
    /// eaten from every food cell the frog sits on. Returns [None] if the frog runs out of moves
    /// or the pond has no start.
    ///
    /// Marks left by an earlier search are cleared first. Flies eaten by an earlier search stay
    /// eaten.
    fn find_path(&self, pond: &mut Pond) -> Option<FrogPath> {
        pond.reset_marks();
        let Some(start) = pond.start() else {
            warn!("Pond has no start cell");
            return None;
        };
        let mut stack = vec![start];
        pond.mark_in_stack(start);
        let mut trace = Vec::new();
        let mut flies_eaten = 0;

        while let Some(&current) = stack.last() {
            trace.push(current);
            if pond.is_end(current) {
                info!(
                    "Reached end cell {} after {} steps, ate {} flies",
                    current,
                    trace.len(),
                    flies_eaten
                );
                return Some(FrogPath { trace, flies_eaten });
            }
            flies_eaten += pond.remove_flies(current);

            match self.find_best(pond, current) {
                Some(next) => {
                    debug!("Hopping from {} to {}", current, next);
                    stack.push(next);
                    pond.mark_in_stack(next);
                }
                None => {
                    debug!("No move from {}, backtracking", current);
                    stack.pop();
                    pond.mark_out_stack(current);
                }
            }
        }
        info!(
            "No path from start {} after visiting {} cells",
            start,
            trace.iter().unique().count()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pond::Terrain;

    /// Accepts every cell the frog could stand on at the same priority, which leaves the order
    /// of exploration entirely to the tie-breaking of the queue.
    struct FlatSolver;

    impl PondSolver for FlatSolver {
        fn score(&self, pond: &Pond, candidate: CellId, _hop: Hop) -> Option<f64> {
            match pond.terrain(candidate)? {
                Terrain::Mud | Terrain::Alligator | Terrain::Start => None,
                _ => Some(1.0),
            }
        }
    }

    #[test]
    fn display_matches_report_format() {
        let path = FrogPath {
            trace: vec![CellId(0), CellId(1), CellId(3)],
            flies_eaten: 2,
        };
        assert_eq!(path.to_string(), "0 1 3 ate 2 flies");
        assert_eq!(path.end(), Some(CellId(3)));
    }

    #[test]
    fn first_neighbour_wins_ties() {
        // Start at (1,0): SouthEast (2,0) comes before SouthWest (0,1) in direction order, so
        // the dead end is tried before the end cell.
        let mut pond: Pond = "MSW\nE..".parse().unwrap();
        let path = FlatSolver.find_path(&mut pond).unwrap();
        assert_eq!(path.trace, vec![CellId(1), CellId(2), CellId(1), CellId(3)]);
    }

    #[test]
    fn exited_cells_are_not_revisited() {
        // The water cell at (2,0) is a dead end; after backing out of it the start must not
        // offer it again.
        let mut pond: Pond = "MSW\nE..".parse().unwrap();
        let path = FlatSolver.find_path(&mut pond).unwrap();
        assert!(pond.is_exited(CellId(2)));
        assert_eq!(path.trace.iter().filter(|&&c| c == CellId(2)).count(), 1);
    }

    #[test]
    fn missing_start_gives_no_path() {
        let mut pond = Pond::new();
        pond.insert(grid_util::point::Point::new(0, 0), Terrain::End);
        assert_eq!(FlatSolver.find_path(&mut pond), None);
    }
}
