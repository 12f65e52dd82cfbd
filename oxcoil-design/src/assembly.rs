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
//! Assembling strands out of the wound backbone positions.

use crate::centerline::Centerline;
use crate::errors::BuildError;
use crate::frames::FrameField;
use crate::helix::HelixFrames;
use crate::parameters::Parameters;
use crate::sequence::Base;
use crate::system::{Nucleotide, Strand, System};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ultraviolet::DVec3;

/// What to build around a centerline.
#[derive(Clone, Debug)]
pub struct AssemblyOptions {
    /// Treat the centerline as a closed loop.
    pub closed: bool,
    /// Generate the complementary strand as well.
    pub double: bool,
    /// Leave the complementary strand of a closed duplex broken.
    pub nicked: bool,
    /// Supercoiling density relative to the relaxed duplex.
    pub supercoiling: f64,
    /// Additive adjustment of the relaxed number of turns, applied before
    /// the linking number is rounded.
    pub writhe_offset: f64,
    /// Seed of the random sequence. A fresh one is used when absent.
    pub seed: Option<u64>,
    /// Sequence of the forward strand. A random one is drawn when absent.
    pub sequence: Option<String>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            closed: true,
            double: true,
            nicked: false,
            supercoiling: 0.,
            writhe_offset: 0.,
            seed: None,
            sequence: None,
        }
    }
}

impl AssemblyOptions {
    /// Checks that the requested combination of options makes sense.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.nicked && !(self.closed && self.double) {
            return Err(BuildError::IncompatibleOptions(String::from(
                "a nick requires a closed, double stranded structure",
            )));
        }
        Ok(())
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Builds the strands of the final system.
///
/// The forward strand follows the order of the centerline points. The
/// complementary strand runs antiparallel to it: its nucleotides are
/// emitted in reverse order, on the opposite side of the axis, with
/// opposite orientation vectors and complemented bases. A closed curve
/// yields cyclic strands, except that a nick leaves the complementary
/// strand linear.
pub fn assemble(
    curve: &Centerline,
    frames: &FrameField,
    helix: &HelixFrames,
    bases: &[Base],
    options: &AssemblyOptions,
    parameters: &Parameters,
) -> System {
    let extent = curve.extent();
    let span = extent.x.max(extent.y).max(extent.z) + parameters.box_margin();
    let mut system = System::new(DVec3::broadcast(span));
    let n = curve.len();

    let mut forward = Strand::new();
    for i in 0..n {
        forward.add_nucleotide(Nucleotide {
            position: helix.positions_forward[i],
            backbone_base: helix.placements[i],
            normal: frames.tangent(i),
            base: bases[i],
        });
    }
    if options.closed {
        forward.make_cyclic();
    }
    system.add_strand(forward);

    if options.double {
        let mut backward = Strand::new();
        for i in (0..n).rev() {
            backward.add_nucleotide(Nucleotide {
                position: helix.positions_backward[i],
                backbone_base: -helix.placements[i],
                normal: -frames.tangent(i),
                base: bases[i].complement(),
            });
        }
        if options.closed && !options.nicked {
            backward.make_cyclic();
        }
        system.add_strand(backward);
    }

    system
}
