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
//! Base sequences of the generated strands.

use crate::errors::BuildError;
use rand::Rng;

/// One of the four bases of DNA.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Base {
    A,
    G,
    C,
    T,
}

impl Base {
    /// The base paired with `self` on the complementary strand.
    pub fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::G => Base::C,
            Base::C => Base::G,
            Base::T => Base::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::G => 'G',
            Base::C => 'C',
            Base::T => 'T',
        }
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'A' | 'a' => Some(Base::A),
            'G' | 'g' => Some(Base::G),
            'C' | 'c' => Some(Base::C),
            'T' | 't' => Some(Base::T),
            _ => None,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Base::A,
            1 => Base::G,
            2 => Base::C,
            _ => Base::T,
        }
    }
}

/// Reads a sequence given as one symbol per base, ignoring any whitespace.
/// The sequence must provide one base for every point of the centerline.
pub fn parse_sequence(text: &str, expected: usize) -> Result<Vec<Base>, BuildError> {
    let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if symbols.len() != expected {
        return Err(BuildError::SequenceLengthMismatch {
            expected,
            actual: symbols.len(),
        });
    }
    symbols
        .into_iter()
        .enumerate()
        .map(|(position, symbol)| {
            Base::from_char(symbol).ok_or(BuildError::InvalidBaseSymbol { symbol, position })
        })
        .collect()
}

/// Draws a uniform random sequence.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> Vec<Base> {
    (0..len).map(|_| Base::random(rng)).collect()
}
