/*
 * Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Cycle search in the basis graph.

use super::Position;
use either::Either;

/// Find the closed cycle through the basis for an entering cell.
///
/// The returned sequence starts with `entering`, continues with basic
/// cells only and alternates between row moves (the next cell shares
/// the row of the previous one) and column moves. The last cell can
/// reach `entering` again with a move of the opposite type, so the
/// cycle closes; its length is even and at least 4.
///
/// Since the basic cells form a spanning tree and the entering cell
/// adds one edge, exactly one such cycle exists. The search is a
/// depth-first search with an explicit stack, one frame of remaining
/// candidate continuations per cell on the current path. `None` means
/// the search space is exhausted without a closing cycle, which
/// cannot happen for a valid basis.
pub fn find_cycle(positions: &[Position], entering: Position) -> Option<Vec<Position>> {
    let mut path = vec![entering];
    let mut stack = vec![frame(&path, positions)];

    while let Some(candidates) = stack.last_mut() {
        if let Some(next) = candidates.pop() {
            path.push(next);
            if path.len() > 3 && closes(&path, entering) {
                return Some(path);
            }
            let candidates = frame(&path, positions);
            stack.push(candidates);
        } else {
            stack.pop();
            path.pop();
        }
    }

    None
}

/// The candidate continuations for the current path.
fn frame(path: &[Position], positions: &[Position]) -> Vec<Position> {
    let free: Vec<Position> = positions.iter().copied().filter(|p| !path.contains(p)).collect();
    continuations(path, &free).collect()
}

/// Returns `true` if the path can close directly back to `entering`.
fn closes(path: &[Position], entering: Position) -> bool {
    let closer = [entering];
    continuations(path, &closer).count() == 1
}

/// All cells of `free` that may extend the path by one step.
///
/// The first step may move along the row or the column of the
/// entering cell; afterwards a row move must be followed by a column
/// move and vice versa.
fn continuations<'a>(path: &[Position], free: &'a [Position]) -> impl Iterator<Item = Position> + 'a {
    let last = *path.last().unwrap();
    if path.len() < 2 {
        Either::Left(free.iter().copied().filter(move |&p| p.0 == last.0 || p.1 == last.1))
    } else {
        let prev = path[path.len() - 2];
        let was_row_move = prev.0 == last.0;
        Either::Right(free.iter().copied().filter(move |&p| {
            if was_row_move {
                p.1 == last.1
            } else {
                p.0 == last.0
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::find_cycle;
    use crate::Position;

    // row/column moves must alternate and all cells but the head must
    // be basic
    fn check_cycle(cycle: &[Position], positions: &[Position], entering: Position) {
        assert_eq!(cycle[0], entering);
        assert!(cycle.len() >= 4);
        assert_eq!(cycle.len() % 2, 0);
        for cell in &cycle[1..] {
            assert!(positions.contains(cell));
        }

        let mut cells = cycle.to_vec();
        cells.push(entering);
        for k in 1..cells.len() - 1 {
            let (a, b, c) = (cells[k - 1], cells[k], cells[k + 1]);
            let was_row_move = a.0 == b.0;
            assert!(a.0 == b.0 || a.1 == b.1);
            if was_row_move {
                assert_eq!(b.1, c.1);
            } else {
                assert_eq!(b.0, c.0);
            }
        }
    }

    #[test]
    fn test_find_cycle_length_four() {
        let positions = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3)];

        let cycle = find_cycle(&positions, (2, 1)).unwrap();

        check_cycle(&cycle, &positions, (2, 1));
        assert_eq!(cycle, vec![(2, 1), (2, 2), (1, 2), (1, 1)]);
    }

    #[test]
    fn test_find_cycle_length_six() {
        let positions = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)];

        let cycle = find_cycle(&positions, (2, 0)).unwrap();

        check_cycle(&cycle, &positions, (2, 0));
        assert_eq!(cycle, vec![(2, 0), (2, 2), (1, 2), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_find_cycle_none() {
        // the entering cell has no basic neighbour in its row or column
        assert_eq!(find_cycle(&[(0, 0), (0, 1), (1, 0)], (2, 2)), None);
        // neighbours exist but no cycle closes
        assert_eq!(find_cycle(&[(0, 0), (0, 1), (0, 2)], (1, 0)), None);
    }
}
