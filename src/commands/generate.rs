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
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use oxcoil_design::{AssemblyOptions, Parameters};

use crate::cli::GenerateArgs;

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let text = fs::read_to_string(&args.centerline)
        .with_context(|| format!("Cannot read centerline file '{}'", args.centerline.display()))?;
    let points = oxcoil_design::parse_xyz(&text)
        .with_context(|| format!("Malformed centerline file '{}'", args.centerline.display()))?;

    let sequence = match &args.sequence {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Cannot read sequence file '{}'", path.display()))?,
        ),
        None => None,
    };

    let options = AssemblyOptions {
        closed: !args.open,
        double: !args.ssdna,
        nicked: args.nicked,
        supercoiling: args.supercoiling,
        writhe_offset: args.writhe_offset,
        seed: args.seed,
        sequence,
    };

    let parameters = Parameters::DEFAULT;
    log::debug!("{}", parameters.formated_string());

    let system = oxcoil_design::generate(points, &options, &parameters)?;

    let success = oxcoil_exports::export_oxdna(&system, &output_base(&args)?)?;
    println!("{}", success.message());

    Ok(())
}

fn output_base(args: &GenerateArgs) -> Result<PathBuf> {
    if let Some(base) = &args.output {
        return Ok(base.clone());
    }
    match args.centerline.file_name() {
        Some(name) => Ok(PathBuf::from(name)),
        None => bail!(
            "Cannot derive an output name from '{}', use --output",
            args.centerline.display()
        ),
    }
}
