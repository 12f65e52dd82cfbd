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
//! Winding the strand backbones around the centerline.

use crate::centerline::Centerline;
use crate::errors::BuildError;
use crate::frames::FrameField;
use crate::parameters::Parameters;
use crate::rotation;
use crate::topology::{self, Topology};
use std::f64::consts::TAU;
use ultraviolet::DVec3;

/// Tolerated drift of the realized twist, in radians per base.
const TWIST_TOLERANCE: f64 = 1e-3;

/// Backbone positions wound around a centerline.
///
/// `positions_forward` follows the order of the centerline points and
/// `positions_backward` holds the positions of the complementary strand at
/// the same indices. `placements` are the unit vectors pointing from the
/// forward positions towards the axis.
#[derive(Clone, Debug)]
pub struct HelixFrames {
    pub positions_forward: Vec<DVec3>,
    pub positions_backward: Vec<DVec3>,
    pub placements: Vec<DVec3>,
    /// Twist accumulated by the forward strand, in turns.
    pub measured_twist: f64,
}

/// Places the two backbones at every point of the curve, advancing the
/// placement vector by the per-base twist of `topology` at each step.
///
/// The propagation rotates the next perpendicular around the next tangent
/// by whatever angle is left once the frame rotation between consecutive
/// points has been subtracted, so bending of the curve does not leak into
/// the twist. The realized twist is measured back from the generated
/// positions, and a drift beyond [`TWIST_TOLERANCE`] is reported as a
/// warning.
pub fn wind_duplex(
    curve: &Centerline,
    frames: &FrameField,
    topology: &Topology,
    parameters: &Parameters,
) -> Result<HelixFrames, BuildError> {
    let n = curve.len();
    let offset = parameters.center_offset;
    let mut placements = vec![DVec3::zero(); n];
    placements[0] = frames.tangent(0).cross(frames.perpendicular(0)).normalized();
    let mut positions_forward = Vec::with_capacity(n);
    let mut positions_backward = Vec::with_capacity(n);
    for i in 0..n {
        let placement = placements[i];
        positions_forward.push(curve.point(i) - placement * offset);
        positions_backward.push(curve.point(i) + placement * offset);
        if i + 1 < n {
            let frame_rotation =
                rotation::signed_angle(placement, frames.perpendicular(i + 1), frames.tangent(i))?;
            let correction = topology.twist_per_base - frame_rotation;
            placements[i + 1] = rotation::rotate(
                frames.perpendicular(i + 1),
                frames.tangent(i + 1),
                correction,
            );
        }
    }

    let measured_twist = topology::measure_twist(curve, frames, &positions_forward)?;
    let steps = curve.nb_segments();
    let target = topology.twist_per_base * steps as f64 / TAU;
    if (measured_twist - target).abs() > TWIST_TOLERANCE * n as f64 / TAU {
        log::warn!(
            "realized twist is {:.4} turns instead of {:.4}",
            measured_twist,
            target
        );
    }

    Ok(HelixFrames {
        positions_forward,
        positions_backward,
        placements,
        measured_twist,
    })
}
