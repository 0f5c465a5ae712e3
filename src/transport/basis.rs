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

//! Basic feasible solutions of the transportation tableau.

use super::Position;
use num_traits::NumAssign;

/// A basic feasible solution.
///
/// The basis is an explicit sparse list of cells with their flow
/// values, never a dense matrix. For a problem with `m` sources and
/// `n` sinks it contains exactly `m + n - 1` cells after construction
/// and after every pivot. A basic cell may carry zero flow (a
/// *degenerate* cell), such cells are kept in the basis like any
/// other.
///
/// Viewed as edges between sources and sinks the basic cells form a
/// spanning tree over all `m + n` nodes. The dual solver and the
/// cycle search rely on this invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis<F> {
    cells: Vec<(Position, F)>,
}

impl<F> Basis<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// A placeholder basis without any cells.
    pub(crate) fn empty() -> Self {
        Basis { cells: Vec::new() }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<(Position, F)>) -> Self {
        Basis { cells }
    }

    /// Construct the initial basis with the north-west-corner rule.
    ///
    /// Starting in the upper left corner, each step allocates the
    /// minimum of the remaining supply and demand to the current cell
    /// and advances the row cursor if the supply is exhausted, else
    /// the column cursor if the demand is exhausted. When both hit
    /// zero at once only the row cursor advances; the next step then
    /// allocates a zero to the new row against the old column, which
    /// keeps the cell count at exactly `m + n - 1` through ties.
    ///
    /// The inputs are not modified, the sweep works on local copies.
    pub fn north_west_corner(supply: &[F], demand: &[F]) -> Self {
        let m = supply.len();
        let n = demand.len();
        let mut supply = supply.to_vec();
        let mut demand = demand.to_vec();

        let mut cells = Vec::with_capacity(m + n - 1);
        let (mut i, mut j) = (0, 0);
        while cells.len() < m + n - 1 {
            let value = if supply[i] < demand[j] { supply[i] } else { demand[j] };
            supply[i] -= value;
            demand[j] -= value;
            cells.push(((i, j), value));

            if supply[i].is_zero() && i + 1 < m {
                i += 1;
            } else if demand[j].is_zero() && j + 1 < n {
                j += 1;
            }
        }

        Basis { cells }
    }

    /// The number of basic cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the basis contains no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is a basic cell.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.iter().any(|&(p, _)| p == pos)
    }

    /// The flow value of the basic cell `pos` or `None` if `pos` is
    /// non-basic.
    pub fn value(&self, pos: Position) -> Option<F> {
        self.cells.iter().find(|&&(p, _)| p == pos).map(|&(_, v)| v)
    }

    /// Iterate over the positions of all basic cells.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|&(p, _)| p)
    }

    /// Iterate over all basic cells with their flow values.
    pub fn iter(&self) -> impl Iterator<Item = &(Position, F)> {
        self.cells.iter()
    }

    /// Perform a pivot step around `cycle` and return the new basis.
    ///
    /// The cycle must start with the entering cell and alternate
    /// between row and column moves, see
    /// [`find_cycle`](super::cycle::find_cycle). Cells at even cycle
    /// positions gain flow, cells at odd positions lose flow. The
    /// leaving cell is the losing cell with the minimum flow value
    /// (the first in cycle order on ties) and that minimum `θ` is
    /// shifted around the cycle. The entering cell always joins the
    /// basis, with value zero in a degenerate pivot.
    ///
    /// The basis itself is left untouched.
    pub fn pivot(&self, cycle: &[Position]) -> Basis<F> {
        let mut leaving = cycle[1];
        let mut theta = self.value(leaving).unwrap();
        for k in (3..cycle.len()).step_by(2) {
            let value = self.value(cycle[k]).unwrap();
            if value < theta {
                theta = value;
                leaving = cycle[k];
            }
        }

        let mut cells = Vec::with_capacity(self.cells.len());
        for &(pos, value) in &self.cells {
            if pos != leaving {
                cells.push((pos, value));
            }
        }
        cells.push((cycle[0], F::zero()));

        for cell in &mut cells {
            if let Some(k) = cycle.iter().position(|&p| p == cell.0) {
                if k % 2 == 0 {
                    cell.1 += theta;
                } else {
                    cell.1 -= theta;
                }
            }
        }

        debug_assert_eq!(cells.len(), self.cells.len());
        Basis { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::Basis;

    #[test]
    fn test_north_west_corner() {
        let basis = Basis::north_west_corner(&[20.0, 30.0, 25.0], &[10.0, 25.0, 15.0, 25.0]);

        assert_eq!(basis.len(), 6);
        assert_eq!(
            basis.iter().cloned().collect::<Vec<_>>(),
            vec![
                ((0, 0), 10.0),
                ((0, 1), 10.0),
                ((1, 1), 15.0),
                ((1, 2), 15.0),
                ((2, 2), 0.0),
                ((2, 3), 25.0),
            ]
        );
    }

    #[test]
    fn test_north_west_corner_degenerate_tie() {
        // supply and demand hit zero at once in the first cell, the
        // zero cell (1,0) must be kept
        let basis = Basis::north_west_corner(&[5.0, 5.0], &[5.0, 5.0]);

        assert_eq!(
            basis.iter().cloned().collect::<Vec<_>>(),
            vec![((0, 0), 5.0), ((1, 0), 0.0), ((1, 1), 5.0)]
        );
    }

    #[test]
    fn test_north_west_corner_integral() {
        let basis = Basis::north_west_corner(&[3i64, 7], &[4, 6]);

        assert_eq!(
            basis.iter().cloned().collect::<Vec<_>>(),
            vec![((0, 0), 3), ((1, 0), 1), ((1, 1), 6)]
        );
    }

    #[test]
    fn test_pivot() {
        let basis = Basis::from_cells(vec![
            ((0, 0), 10.0),
            ((0, 1), 10.0),
            ((1, 1), 15.0),
            ((1, 2), 15.0),
            ((2, 2), 0.0),
            ((2, 3), 25.0),
        ]);

        // entering (2,1): (2,2) loses its zero flow, the pivot is degenerate
        let next = basis.pivot(&[(2, 1), (2, 2), (1, 2), (1, 1)]);

        assert_eq!(next.len(), 6);
        assert!(!next.contains((2, 2)));
        assert_eq!(next.value((2, 1)), Some(0.0));
        assert_eq!(next.value((1, 2)), Some(15.0));
        assert_eq!(next.value((1, 1)), Some(15.0));
        // the old basis is unchanged
        assert_eq!(basis.value((2, 2)), Some(0.0));
    }

    #[test]
    fn test_pivot_shifts_theta() {
        let basis = Basis::from_cells(vec![
            ((0, 0), 4.0),
            ((0, 1), 6.0),
            ((1, 1), 2.0),
            ((1, 2), 8.0),
        ]);

        let next = basis.pivot(&[(1, 0), (1, 1), (0, 1), (0, 0)]);

        // theta = min(2, 4) = 2, cell (1,1) leaves
        assert_eq!(next.len(), 4);
        assert!(!next.contains((1, 1)));
        assert_eq!(next.value((1, 0)), Some(2.0));
        assert_eq!(next.value((0, 1)), Some(8.0));
        assert_eq!(next.value((0, 0)), Some(2.0));
        assert_eq!(next.value((1, 2)), Some(8.0));
    }
}
