/*
oxcoil, a generator of supercoiled DNA duplexes for oxDNA simulations.
    Copyright (C) 2026  The oxcoil developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use oxcoil_design::cadnano::{self, CadnanoDesign, LatticeError, LatticeType};

use crate::cli::LatticeArgs;

pub fn run_lattice(args: LatticeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.design)
        .with_context(|| format!("Cannot read design file '{}'", args.design.display()))?;
    let design = CadnanoDesign::from_json(&text)
        .with_context(|| format!("Invalid json file '{}'", args.design.display()))?;

    let lattice = match cadnano::detect_lattice(&design) {
        Ok(lattice) => lattice,
        Err(LatticeError::Ambiguous { .. }) => ask_lattice()?,
        Err(e) => return Err(e.into()),
    };

    println!("{}", lattice);
    Ok(())
}

/// Asks the user to disambiguate a design whose helix length fits both
/// lattices.
fn ask_lattice() -> Result<LatticeType> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Is this a square lattice design? [sq/he] ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("No answer, cannot determine the lattice type");
        }
        match line.trim().to_lowercase().parse::<LatticeType>() {
            Ok(lattice) => return Ok(lattice),
            Err(_) => {
                println!("Invalid input. Please enter 'sq' for square or 'he' for honeycomb.")
            }
        }
    }
}
