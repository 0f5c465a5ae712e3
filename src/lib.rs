// Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A library for solving balanced transportation problems.
//!
//! Given `m` sources with supplies, `n` sinks with demands and an
//! `m`×`n` matrix of unit shipping costs, the solver computes a
//! shipment plan that satisfies all supplies and demands exactly at
//! minimum total cost. The algorithm is the classical transportation
//! simplex method: the initial basic feasible solution is constructed
//! with the north-west-corner rule and then improved by pivot steps
//! until no non-basic cell has a positive reduced cost.
//!
//! Only *balanced* problems (total supply equals total demand) are
//! accepted, see [`Problem::check_balance`](crate::Problem::check_balance).
//!
//! # Example
//!
//! ```
//! use transport_simplex::{transport_simplex, Problem};
//!
//! let problem = Problem::new(
//!     vec![20.0, 30.0, 25.0],
//!     vec![10.0, 25.0, 15.0, 25.0],
//!     vec![
//!         8.0, 6.0, 10.0, 9.0, //
//!         9.0, 12.0, 13.0, 7.0, //
//!         14.0, 9.0, 16.0, 5.0,
//!     ],
//! );
//!
//! let solution = transport_simplex(&problem)?;
//! assert_eq!(solution.value(), 585.0);
//! # Ok::<_, transport_simplex::Error<f64>>(())
//! ```

pub mod problem;
pub use crate::problem::{Problem, Solution};

pub mod transport;
pub use crate::transport::simplex::{transport_simplex, TransportSimplex};
pub use crate::transport::{Error, Position, SolutionState};

#[cfg(any(feature = "csv"))]
pub mod csv;
