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
//! Reading cadnano designs and classifying their lattice.

use serde_json::Value;
use thiserror::Error;

/// The part of a cadnano design needed to classify its lattice. Any other
/// field of the file is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CadnanoDesign {
    #[serde(default)]
    pub vstrands: Vec<CadnanoVstrand>,
}

/// One virtual helix of a cadnano design.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CadnanoVstrand {
    /// Scaffold slots of the helix, one per lattice position.
    #[serde(default)]
    pub scaf: Vec<Value>,
}

impl CadnanoDesign {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// The two lattices on which cadnano designs are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LatticeType {
    Square,
    Honeycomb,
}

impl LatticeType {
    pub fn code(self) -> &'static str {
        match self {
            LatticeType::Square => "sq",
            LatticeType::Honeycomb => "he",
        }
    }
}

impl std::fmt::Display for LatticeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("unknown lattice code, expected \"sq\" or \"he\"")]
pub struct UnknownLatticeCode;

impl std::str::FromStr for LatticeType {
    type Err = UnknownLatticeCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "sq" => Ok(LatticeType::Square),
            "he" => Ok(LatticeType::Honeycomb),
            _ => Err(UnknownLatticeCode),
        }
    }
}

/// A design whose helix length does not single out one lattice.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("{num_bases} bases per helix fits both a square and a honeycomb lattice")]
    Ambiguous { num_bases: usize },
    #[error("{num_bases} bases per helix fits neither a square nor a honeycomb lattice")]
    UnknownBaseCount { num_bases: usize },
}

/// Guesses the lattice of a cadnano design from the length of its helices.
///
/// Honeycomb designs hold a multiple of 21 bases per helix, square designs
/// a multiple of 32. The first helix with at least one slot decides, and a
/// design without any slot defaults to the square lattice.
pub fn detect_lattice(design: &CadnanoDesign) -> Result<LatticeType, LatticeError> {
    let num_bases = design
        .vstrands
        .iter()
        .map(|helix| helix.scaf.len())
        .find(|len| *len > 0)
        .unwrap_or(0);
    if num_bases == 0 {
        return Ok(LatticeType::Square);
    }
    match (num_bases % 21 == 0, num_bases % 32 == 0) {
        (true, true) => Err(LatticeError::Ambiguous { num_bases }),
        (true, false) => Ok(LatticeType::Honeycomb),
        (false, true) => Ok(LatticeType::Square),
        (false, false) => Err(LatticeError::UnknownBaseCount { num_bases }),
    }
}
