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

//! The transportation simplex method.

pub mod basis;
pub mod cycle;
pub mod duals;
pub mod simplex;

pub use self::basis::Basis;
pub use self::simplex::{transport_simplex, TransportSimplex};

use std::error;
use std::fmt;

/// A cell of the transportation tableau.
///
/// The pair `(i, j)` addresses the cell of source `i` and sink `j`.
pub type Position = (usize, usize);

/// The state of a solve.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The problem has been solved to optimality
    Optimal,
}

/// Error during a solve.
///
/// All errors are structural: either a violated precondition of the
/// input or a violated internal invariant. None of them is transient,
/// so nothing is ever retried.
#[derive(Clone, Debug, PartialEq)]
pub enum Error<F> {
    /// The total supply differs from the total demand.
    ///
    /// The problem must be balanced, unbalanced instances are not
    /// augmented with dummy rows or columns.
    Imbalanced {
        /// The total supply of all sources.
        supply: F,
        /// The total demand of all sinks.
        demand: F,
    },
    /// The dual potentials could not be recovered from the basis.
    ///
    /// The basic cells must form a spanning tree over all sources and
    /// sinks. This error indicates a defect in the basis construction
    /// or in a pivot step, it cannot be caused by valid input.
    DisconnectedBasis,
    /// No closed cycle through the entering cell exists.
    ///
    /// For a valid basis the cycle is unique and always exists, so
    /// this error indicates the same invariant violation as
    /// [`Error::DisconnectedBasis`].
    NoCycle,
}

impl<F: fmt::Display> fmt::Display for Error<F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Imbalanced { supply, demand } => write!(
                fmt,
                "total supply ({}) and total demand ({}) are not equal",
                supply, demand
            ),
            Error::DisconnectedBasis => write!(fmt, "basis does not span all sources and sinks"),
            Error::NoCycle => write!(fmt, "no closing cycle through the entering cell"),
        }
    }
}

impl<F: fmt::Debug + fmt::Display> error::Error for Error<F> {}
