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
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oxcoil",
    about = "Generates supercoiled DNA duplex configurations for oxDNA",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an oxDNA configuration and topology from a centerline curve
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Report the lattice type of a cadnano design
    #[command(visible_alias = "l")]
    Lattice(LatticeArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Centerline file, one "x y z" row per base pair
    #[arg(value_name = "FILE")]
    pub centerline: PathBuf,

    /// Treat the centerline as a closed loop (default)
    #[arg(short, long, overrides_with = "open")]
    pub closed: bool,

    /// Treat the centerline as an open curve
    #[arg(short, long, overrides_with = "closed")]
    pub open: bool,

    /// Build a double stranded structure (default)
    #[arg(short, long, overrides_with = "ssdna")]
    pub dsdna: bool,

    /// Build a single stranded structure
    #[arg(short, long, overrides_with = "dsdna")]
    pub ssdna: bool,

    /// Leave a nick in the complementary strand
    #[arg(short, long)]
    pub nicked: bool,

    /// Supercoiling density
    #[arg(
        short = 'p',
        long,
        value_name = "SIGMA",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub supercoiling: f64,

    /// Writhe added on top of the measured one when choosing the linking number
    #[arg(
        short = 'w',
        long = "writhe",
        value_name = "WRITHE",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub writhe_offset: f64,

    /// Seed for the random sequence generator
    #[arg(short = 'e', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// File holding the sequence of the first strand
    #[arg(short = 'q', long, value_name = "FILE")]
    pub sequence: Option<PathBuf>,

    /// Base name of the output files (defaults to the input file name)
    #[arg(long, value_name = "BASE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct LatticeArgs {
    /// cadnano design file
    #[arg(value_name = "FILE")]
    pub design: PathBuf,
}

pub fn parse() -> Cli {
    Cli::parse()
}
