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

//! Reading transportation instances from delimited text.
//!
//! An instance is a rectangular table of `;`-separated numbers with
//! `m + 1` rows and `n + 1` columns:
//!
//! 1. the upper left `m`×`n` block is the cost matrix,
//! 2. the last column (except its bottom field) holds the supplies,
//! 3. the last row (except its rightmost field) holds the demands,
//! 4. the bottom right field is ignored (it usually repeats the
//!    total).
//!
//! Empty lines are allowed and ignored. All rows must have the same
//! number of fields.

use crate::problem::{Problem, Solution};
use std::error;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::FromStr;

use num_traits::NumAssign;

/// Error when reading a delimited instance file.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read an instance from a reader.
pub fn read<R, F>(r: R) -> Result<Problem<F>>
where
    R: Read,
    F: FromStr + NumAssign + PartialOrd + Copy,
    F::Err: fmt::Display,
{
    let mut rows: Vec<Vec<F>> = Vec::new();
    let mut width = 0;

    for (k, line) in BufReader::new(r).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(width);
        for field in line.split(';') {
            let field = field.trim();
            row.push(field.parse().map_err(|err| Error::Format {
                line: k + 1,
                msg: format!("invalid number '{}': {}", field, err),
            })?);
        }

        if width == 0 {
            width = row.len();
        } else if row.len() != width {
            return Err(Error::Data {
                line: k + 1,
                msg: format!("expected {} fields, got {}", width, row.len()),
            });
        }
        rows.push(row);
    }

    if rows.len() < 2 || width < 2 {
        return Err(Error::Data {
            line: rows.len(),
            msg: "an instance needs at least one source and one sink".to_string(),
        });
    }

    let num_sinks = width - 1;
    let mut demand = rows.pop().unwrap();
    demand.truncate(num_sinks);

    let mut supply = Vec::with_capacity(rows.len());
    let mut costs = Vec::with_capacity(rows.len() * num_sinks);
    for mut row in rows {
        supply.push(row.pop().unwrap());
        costs.extend(row);
    }

    Ok(Problem::new(supply, demand, costs))
}

/// Read an instance from a file.
pub fn read_from_file<F>(filename: &str) -> Result<Problem<F>>
where
    F: FromStr + NumAssign + PartialOrd + Copy,
    F::Err: fmt::Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a shipment plan as delimited text, one row per source.
pub fn write_solution<W, F>(mut w: W, solution: &Solution<F>) -> io::Result<()>
where
    W: Write,
    F: fmt::Display + Copy,
{
    for i in 0..solution.num_sources() {
        for j in 0..solution.num_sinks() {
            if j > 0 {
                write!(w, ";")?;
            }
            write!(w, "{}", solution.flow(i, j))?;
        }
        writeln!(w)?;
    }
    Ok(())
}
