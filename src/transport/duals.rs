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

//! Dual potentials and pricing of non-basic cells.

use super::basis::Basis;
use super::Position;
use crate::problem::Problem;
use num_traits::NumAssign;

/// Recover the dual potentials `(u, v)` from the current basis.
///
/// The potentials satisfy `u[i] + v[j] = cost[i][j]` on every basic
/// cell; `u[0]` is fixed to zero as the reference since only relative
/// values matter for the reduced costs.
///
/// The basic cells are resolved as a worklist: each pass moves every
/// cell with exactly one known potential out of the pending set and
/// computes the other potential from the cost equality. A pass that
/// resolves nothing means the basis does not span all sources and
/// sinks; in that case `None` is returned instead of looping forever.
pub fn potentials<F>(basis: &Basis<F>, problem: &Problem<F>) -> Option<(Vec<F>, Vec<F>)>
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut u: Vec<Option<F>> = vec![None; problem.num_sources()];
    let mut v: Vec<Option<F>> = vec![None; problem.num_sinks()];
    u[0] = Some(F::zero());

    let mut pending: Vec<Position> = basis.positions().collect();
    while !pending.is_empty() {
        let mut still_pending = Vec::with_capacity(pending.len());
        for &(i, j) in &pending {
            match (u[i], v[j]) {
                (Some(ui), None) => v[j] = Some(problem.cost(i, j) - ui),
                (None, Some(vj)) => u[i] = Some(problem.cost(i, j) - vj),
                // both potentials known, the cell is resolved
                (Some(_), Some(_)) => (),
                (None, None) => still_pending.push((i, j)),
            }
        }
        if still_pending.len() == pending.len() {
            return None;
        }
        pending = still_pending;
    }

    let u = u.into_iter().collect::<Option<Vec<_>>>()?;
    let v = v.into_iter().collect::<Option<Vec<_>>>()?;
    Some((u, v))
}

/// Price all non-basic cells.
///
/// The reduced cost of a non-basic cell `(i, j)` is
/// `u[i] + v[j] - cost[i][j]`; a positive value means that moving the
/// cell into the basis can reduce the total cost. The cells are
/// returned in row-major scan order.
pub fn reduced_costs<F>(basis: &Basis<F>, problem: &Problem<F>, u: &[F], v: &[F]) -> Vec<(Position, F)>
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut costs = Vec::new();
    for i in 0..problem.num_sources() {
        for j in 0..problem.num_sinks() {
            if !basis.contains((i, j)) {
                costs.push(((i, j), u[i] + v[j] - problem.cost(i, j)));
            }
        }
    }
    costs
}

/// The entering cell or `None` if the current basis is optimal.
///
/// The basis is optimal iff no reduced cost is positive. Otherwise
/// the cell with the maximum reduced cost enters the basis; on ties
/// the cell encountered last in scan order wins.
pub fn entering_position<F>(reduced: &[(Position, F)]) -> Option<Position>
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut best: Option<(Position, F)> = None;
    for &(pos, cost) in reduced {
        match best {
            Some((_, bc)) if cost < bc => (),
            _ => best = Some((pos, cost)),
        }
    }
    best.and_then(|(pos, cost)| if cost > F::zero() { Some(pos) } else { None })
}

#[cfg(test)]
mod tests {
    use super::{entering_position, potentials, reduced_costs};
    use crate::transport::basis::Basis;
    use crate::Problem;

    fn textbook() -> Problem<f64> {
        Problem::new(
            vec![20.0, 30.0, 25.0],
            vec![10.0, 25.0, 15.0, 25.0],
            vec![
                8.0, 6.0, 10.0, 9.0, //
                9.0, 12.0, 13.0, 7.0, //
                14.0, 9.0, 16.0, 5.0,
            ],
        )
    }

    #[test]
    fn test_potentials() {
        let problem = textbook();
        let basis = Basis::north_west_corner(problem.supplies(), problem.demands());

        let (u, v) = potentials(&basis, &problem).unwrap();

        assert_eq!(u, vec![0.0, 6.0, 9.0]);
        assert_eq!(v, vec![8.0, 6.0, 7.0, -4.0]);
        // cost equality holds on every basic cell
        for (i, j) in basis.positions() {
            assert_eq!(u[i] + v[j], problem.cost(i, j));
        }
    }

    #[test]
    fn test_potentials_disconnected() {
        let problem = Problem::new(vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 2.0, 3.0, 4.0]);
        // two isolated cells, not a spanning tree
        let basis = Basis::from_cells(vec![((0, 0), 1.0), ((1, 1), 1.0)]);

        assert_eq!(potentials(&basis, &problem), None);
    }

    #[test]
    fn test_reduced_costs_and_entering() {
        let problem = textbook();
        let basis = Basis::north_west_corner(problem.supplies(), problem.demands());
        let (u, v) = potentials(&basis, &problem).unwrap();

        let reduced = reduced_costs(&basis, &problem, &u, &v);

        assert_eq!(reduced.len(), 6);
        assert!(reduced.contains(&((1, 0), 5.0)));
        assert!(reduced.contains(&((2, 1), 6.0)));
        assert!(reduced.contains(&((0, 3), -13.0)));
        assert_eq!(entering_position(&reduced), Some((2, 1)));
    }

    #[test]
    fn test_entering_optimal() {
        assert_eq!(entering_position::<f64>(&[((0, 1), -2.0), ((1, 0), 0.0)]), None);
        assert_eq!(entering_position::<f64>(&[]), None);
    }

    #[test]
    fn test_entering_tie_takes_last() {
        let reduced = [((0, 1), 3.0), ((0, 2), 1.0), ((1, 0), 3.0)];
        assert_eq!(entering_position(&reduced), Some((1, 0)));
    }
}
