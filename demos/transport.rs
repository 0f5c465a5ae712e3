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

use std::error::Error;
use std::io::stdout;

use rustop::opts;
use transport_simplex::{csv, SolutionState, TransportSimplex};

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Solve a balanced transportation problem with the transportation simplex method.";
        param file:String, desc:"Instance file name (';'-separated costs, trailing supply column and demand row)";
    }
    .parse_or_exit();

    let problem = csv::read_from_file::<f64>(&args.file)?;

    println!("Instance            : {}", args.file);
    println!("Number of sources   : {}", problem.num_sources());
    println!("Number of sinks     : {}", problem.num_sinks());
    println!("Total supply        : {}", problem.total_supply());
    println!("Total demand        : {}", problem.total_demand());

    let mut spx = TransportSimplex::new(&problem);
    let state = spx.solve()?;
    let solution = spx.solution();

    println!();
    println!("Solution state      : {:?}", state);
    println!("Total cost          : {:.2}", solution.value());
    println!("Iterations          : {}", spx.num_iterations());
    assert_eq!(state, SolutionState::Optimal);

    println!();
    csv::write_solution(stdout().lock(), &solution)?;

    Ok(())
}
