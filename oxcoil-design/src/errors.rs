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
//! Errors that can abort the construction of a structure.

use thiserror::Error;

/// An error raised while turning a centerline into a nucleotide system.
///
/// Every variant describes an unusable input. Numerical warnings, such as a
/// realized twist drifting away from its target, are logged instead.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("centerline has {found} points, at least {required} are required")]
    InsufficientPoints { found: usize, required: usize },
    #[error("malformed centerline row at line {line}: {detail}")]
    MalformedPoint { line: usize, detail: String },
    #[error("degenerate curve at point {index}: {detail}")]
    DegenerateCurve { index: usize, detail: String },
    #[error("degenerate vector in {context}: near-zero input after projection")]
    DegenerateVector { context: &'static str },
    #[error("sequence has {actual} bases but the centerline has {expected} points")]
    SequenceLengthMismatch { expected: usize, actual: usize },
    #[error("invalid base symbol {symbol:?} at sequence position {position}")]
    InvalidBaseSymbol { symbol: char, position: usize },
    #[error("incompatible options: {0}")]
    IncompatibleOptions(String),
}
