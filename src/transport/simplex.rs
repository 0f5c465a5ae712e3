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

//! The transportation simplex driver.

use super::basis::Basis;
use super::cycle::find_cycle;
use super::duals::{entering_position, potentials, reduced_costs};
use super::{Error, Position, SolutionState};
use crate::problem::{Problem, Solution};
use num_traits::{NumAssign, Signed};

/// A transportation simplex solver.
///
/// The solver borrows the problem instance and owns the current basic
/// feasible solution. Each call to [`solve`](TransportSimplex::solve)
/// iterates dual recovery, pricing, cycle search and pivoting until
/// no non-basic cell has a positive reduced cost. The basis is kept
/// between calls, so solving an already optimal instance a second
/// time performs no pivots at all.
///
/// There is no anti-cycling rule: like most textbook renditions the
/// method may in principle revisit a basis on heavily degenerate
/// instances. [`num_iterations`](TransportSimplex::num_iterations)
/// exposes the pivot count of the latest call for callers that want
/// to watch progress.
pub struct TransportSimplex<'a, F> {
    problem: &'a Problem<F>,
    basis: Basis<F>,
    niter: usize,
    state: SolutionState,
    need_new_basis: bool,
}

impl<'a, F> TransportSimplex<'a, F>
where
    F: NumAssign + PartialOrd + Signed + Copy,
{
    pub fn new(problem: &'a Problem<F>) -> Self {
        TransportSimplex {
            problem,
            basis: Basis::empty(),
            niter: 0,
            state: SolutionState::Unknown,
            need_new_basis: true,
        }
    }

    /// The problem being solved.
    pub fn as_problem(&self) -> &'a Problem<F> {
        self.problem
    }

    /// Run the transportation simplex method.
    ///
    /// Verifies the balance precondition, constructs the initial
    /// basis with the north-west-corner rule if necessary and pivots
    /// until optimality.
    pub fn solve(&mut self) -> Result<SolutionState, Error<F>> {
        self.problem.check_balance()?;
        self.niter = 0;

        if self.need_new_basis {
            self.basis = Basis::north_west_corner(self.problem.supplies(), self.problem.demands());
            self.state = SolutionState::Unknown;
            self.need_new_basis = false;
        }

        loop {
            let (u, v) = potentials(&self.basis, self.problem).ok_or(Error::DisconnectedBasis)?;
            let reduced = reduced_costs(&self.basis, self.problem, &u, &v);

            let entering = match entering_position(&reduced) {
                Some(pos) => pos,
                None => {
                    self.state = SolutionState::Optimal;
                    return Ok(self.state);
                }
            };

            let positions: Vec<Position> = self.basis.positions().collect();
            let cycle = find_cycle(&positions, entering).ok_or(Error::NoCycle)?;
            self.basis = self.basis.pivot(&cycle);
            self.niter += 1;
        }
    }

    /// The solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        if self.need_new_basis {
            SolutionState::Unknown
        } else {
            self.state
        }
    }

    /// The number of pivots performed by the latest call to
    /// [`solve`](TransportSimplex::solve).
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// The current basic feasible solution.
    pub fn basis(&self) -> &Basis<F> {
        &self.basis
    }

    /// The amount shipped from source `i` to sink `j`.
    ///
    /// Non-basic cells carry no flow.
    pub fn flow(&self, i: usize, j: usize) -> F {
        self.basis.value((i, j)).unwrap_or_else(F::zero)
    }

    /// The total cost of the latest computed plan.
    pub fn value(&self) -> F {
        let mut value = F::zero();
        for &((i, j), f) in self.basis.iter() {
            value += self.problem.cost(i, j) * f;
        }
        value
    }

    /// Materialize the dense solution matrix together with its total
    /// cost.
    pub fn solution(&self) -> Solution<F> {
        let m = self.problem.num_sources();
        let n = self.problem.num_sinks();
        let mut flows = vec![F::zero(); m * n];
        for &((i, j), f) in self.basis.iter() {
            flows[i * n + j] = f;
        }
        Solution::new(m, n, flows, self.value())
    }
}

/// Solve a balanced transportation problem.
///
/// Convenience wrapper that runs [`TransportSimplex`] on the instance
/// and returns the optimal shipment plan with its total cost.
pub fn transport_simplex<F>(problem: &Problem<F>) -> Result<Solution<F>, Error<F>>
where
    F: NumAssign + PartialOrd + Signed + Copy,
{
    let mut spx = TransportSimplex::new(problem);
    spx.solve()?;
    Ok(spx.solution())
}
