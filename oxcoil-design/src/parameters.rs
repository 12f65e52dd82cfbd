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
//! DNA geometric parameters, in oxDNA simulation units.

use std::f64::consts::TAU;

/// Geometric parameters of the double helix.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Parameters {
    /// Distance between two consecutive bases along the axis of a
    /// helix, in oxDNA length units.
    pub rise: f64,
    /// Distance between the center of mass of a nucleotide and the
    /// axis of the double helix it belongs to.
    pub center_offset: f64,
    /// Number of base pairs per turn of a relaxed helix.
    pub bases_per_turn: f64,
}

impl Parameters {
    /// Default values for B-DNA in the oxDNA model.
    pub const DEFAULT: Parameters = Parameters {
        // rise of the oxDNA duplex, in simulation units
        rise: 0.3897628551303122,
        bases_per_turn: 10.5,
        center_offset: 0.6,
    };

    /// The rotation between two consecutive base pairs of a relaxed
    /// helix, in radians.
    pub fn relaxed_twist(&self) -> f64 {
        TAU / self.bases_per_turn
    }

    /// Margin added to the extent of a structure when deriving the
    /// size of its simulation box.
    pub fn box_margin(&self) -> f64 {
        2. * self.rise
    }

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(&mut ret, "  Rise: {:.5}", self.rise).unwrap_or_default();
        writeln!(&mut ret, "  Center offset: {:.2}", self.center_offset).unwrap_or_default();
        writeln!(&mut ret, "  #Bases per turn: {:.2}", self.bases_per_turn).unwrap_or_default();
        ret
    }
}

impl std::default::Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
