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

//! Transportation problem instances and solutions.

use crate::transport::Error;
use num_traits::NumAssign;

/// A transportation problem instance.
///
/// An instance consists of `m` sources with non-negative supplies, `n`
/// sinks with non-negative demands and a dense `m`×`n` matrix of unit
/// shipping costs. The instance is immutable for the lifetime of a
/// solve, the solver works on its own copies wherever mutation is
/// needed.
#[derive(Clone, Debug)]
pub struct Problem<F> {
    supply: Vec<F>,
    demand: Vec<F>,
    /// The cost matrix in row-major order.
    costs: Vec<F>,
}

impl<F> Problem<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// Create a new instance.
    ///
    /// The cost matrix is given in row-major order, i.e. `costs[i*n + j]`
    /// is the unit cost for shipping from source `i` to sink `j`.
    ///
    /// # Panics
    ///
    /// Panics if `supply` or `demand` is empty or if the size of the
    /// cost matrix does not match.
    pub fn new(supply: Vec<F>, demand: Vec<F>, costs: Vec<F>) -> Self {
        assert!(
            !supply.is_empty() && !demand.is_empty(),
            "an instance must have at least one source and one sink"
        );
        assert_eq!(
            costs.len(),
            supply.len() * demand.len(),
            "cost matrix must have {}x{} entries",
            supply.len(),
            demand.len()
        );
        Problem { supply, demand, costs }
    }

    /// The number of sources.
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// The number of sinks.
    pub fn num_sinks(&self) -> usize {
        self.demand.len()
    }

    /// The supply of source `i`.
    pub fn supply(&self, i: usize) -> F {
        self.supply[i]
    }

    /// The demand of sink `j`.
    pub fn demand(&self, j: usize) -> F {
        self.demand[j]
    }

    /// All supplies.
    pub fn supplies(&self) -> &[F] {
        &self.supply
    }

    /// All demands.
    pub fn demands(&self) -> &[F] {
        &self.demand
    }

    /// The unit cost for shipping from source `i` to sink `j`.
    pub fn cost(&self, i: usize, j: usize) -> F {
        self.costs[i * self.demand.len() + j]
    }

    /// The total supply of all sources.
    pub fn total_supply(&self) -> F {
        let mut total = F::zero();
        for &s in &self.supply {
            total += s;
        }
        total
    }

    /// The total demand of all sinks.
    pub fn total_demand(&self) -> F {
        let mut total = F::zero();
        for &d in &self.demand {
            total += d;
        }
        total
    }

    /// Verify that the instance is balanced.
    ///
    /// Returns [`Error::Imbalanced`] carrying both totals if the total
    /// supply differs from the total demand. The totals are compared
    /// *exactly*; callers with floating point data subject to rounding
    /// must round or scale their input beforehand.
    pub fn check_balance(&self) -> Result<(), Error<F>> {
        let supply = self.total_supply();
        let demand = self.total_demand();
        if supply != demand {
            return Err(Error::Imbalanced { supply, demand });
        }
        Ok(())
    }
}

/// An optimal shipment plan.
///
/// The plan is a dense `m`×`n` matrix of flow values, zero on all
/// non-basic cells, together with the objective value
/// `Σ cost[i][j] · flow[i][j]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    num_sources: usize,
    num_sinks: usize,
    flows: Vec<F>,
    value: F,
}

impl<F> Solution<F>
where
    F: Copy,
{
    pub(crate) fn new(num_sources: usize, num_sinks: usize, flows: Vec<F>, value: F) -> Self {
        Solution {
            num_sources,
            num_sinks,
            flows,
            value,
        }
    }

    /// The number of sources.
    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    /// The number of sinks.
    pub fn num_sinks(&self) -> usize {
        self.num_sinks
    }

    /// The amount shipped from source `i` to sink `j`.
    pub fn flow(&self, i: usize, j: usize) -> F {
        self.flows[i * self.num_sinks + j]
    }

    /// The total cost of the plan.
    pub fn value(&self) -> F {
        self.value
    }
}
