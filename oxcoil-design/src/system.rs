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
//! The nucleotide system produced by the generator.

use crate::sequence::Base;
use ultraviolet::DVec3;

fn is_false(b: &bool) -> bool {
    !*b
}

/// One nucleotide of a strand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Nucleotide {
    /// Center of mass position.
    pub position: DVec3,
    /// Unit vector of the backbone-base axis.
    pub backbone_base: DVec3,
    /// Unit vector of the stacking axis, along the strand direction.
    pub normal: DVec3,
    pub base: Base,
}

/// An ordered run of nucleotides, from its 5' end to its 3' end.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Strand {
    pub nucleotides: Vec<Nucleotide>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cyclic: bool,
}

impl Strand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_nucleotide(&mut self, nucleotide: Nucleotide) {
        self.nucleotides.push(nucleotide);
    }

    /// Joins the two ends of the strand.
    pub fn make_cyclic(&mut self) {
        self.cyclic = true;
    }

    pub fn len(&self) -> usize {
        self.nucleotides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleotides.is_empty()
    }
}

/// A set of strands together with the cubic simulation box containing them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct System {
    pub box_size: DVec3,
    strands: Vec<Strand>,
}

impl System {
    pub fn new(box_size: DVec3) -> Self {
        Self {
            box_size,
            strands: Vec::new(),
        }
    }

    pub fn add_strand(&mut self, strand: Strand) {
        self.strands.push(strand);
    }

    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }

    pub fn nb_nucleotides(&self) -> usize {
        self.strands.iter().map(Strand::len).sum()
    }
}
