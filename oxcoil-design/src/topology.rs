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
//! Writhe, linking number and twist of a structure.

use crate::centerline::Centerline;
use crate::errors::BuildError;
use crate::frames::FrameField;
use crate::parameters::Parameters;
use crate::rotation;
use itertools::Itertools;
use std::f64::consts::{PI, TAU};
use ultraviolet::DVec3;

/// The topological state chosen for a structure. Writhe, linking number and
/// twist are expressed in turns and satisfy White's relation Lk = Tw + Wr.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Topology {
    pub writhe: f64,
    pub linking_number: i64,
    pub twist: f64,
    /// Rotation between consecutive base pairs, in radians.
    pub twist_per_base: f64,
}

/// Writhe of a closed curve, from the Gauss double integral discretized
/// over pairs of non-adjacent segments evaluated at their midpoints. The
/// sign pairs with the right-handed twist of [`measure_twist`], so the
/// linking realized by a wound structure is `twist + writhe`.
///
/// An open curve relaxes its bending out through its free ends, so its
/// writhe is taken to be zero.
pub fn writhe(curve: &Centerline) -> f64 {
    if !curve.is_closed() {
        return 0.;
    }
    let n = curve.nb_segments();
    let mut sum = 0.;
    for (i, j) in (0..n).tuple_combinations() {
        if j == i + 1 || (i == 0 && j == n - 1) {
            continue;
        }
        let r = curve.segment_middle(i) - curve.segment_middle(j);
        let distance = r.mag();
        sum += curve.segment(i).cross(curve.segment(j)).dot(r) / distance.powi(3);
    }
    // each unordered pair contributes twice to the double integral
    sum / (2. * PI)
}

/// Chooses the integer linking number realizing a supercoiling density, and
/// splits it into the twist left once the writhe of the axis is accounted
/// for.
///
/// `writhe_offset` shifts the relaxed number of turns before rounding,
/// which lets a caller trade extra turns in or out of the structure without
/// changing its axis.
pub fn solve_linking(
    nb_points: usize,
    writhe: f64,
    supercoiling: f64,
    writhe_offset: f64,
    parameters: &Parameters,
) -> Topology {
    let relaxed_turns = nb_points as f64 / parameters.bases_per_turn;
    let linking_number = (relaxed_turns * (1. + supercoiling) + writhe_offset).round() as i64;
    let twist = linking_number as f64 - writhe;
    Topology {
        writhe,
        linking_number,
        twist,
        twist_per_base: TAU * twist / nb_points as f64,
    }
}

/// Turning of a strand around the axis of the structure, in turns,
/// accumulated segment by segment from generated positions. For a well
/// built structure this matches the twist of its [`Topology`].
pub fn measure_twist(
    curve: &Centerline,
    frames: &FrameField,
    strand_positions: &[DVec3],
) -> Result<f64, BuildError> {
    let n = curve.len();
    let steps = if curve.is_closed() { n } else { n - 1 };
    let mut total = 0.;
    for i in 0..steps {
        let j = (i + 1) % n;
        let here = strand_positions[i] - curve.point(i);
        let there = strand_positions[j] - curve.point(j);
        total += rotation::signed_angle(here, there, frames.tangent(i))?;
    }
    Ok(total / TAU)
}
