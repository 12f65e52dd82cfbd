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
//! Rotations about an arbitrary axis and signed angles between vectors.

use crate::errors::BuildError;
use ultraviolet::DVec3;

const EPSILON_SQ: f64 = 1e-12;

/// Rotates `v` by `angle` radians around `axis`, following the right-hand
/// rule. The axis must be a unit vector.
pub fn rotate(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * (axis.dot(v) * (1. - cos))
}

/// Angle, in radians, of the rotation around `axis` that brings the
/// projection of `a` onto the projection of `b`, in the plane orthogonal to
/// `axis`. The sign follows the right-hand rule and the axis must be a unit
/// vector.
///
/// The inputs need not be normalized, but an input that projects to a
/// near-zero vector has no defined angle and is reported as an error.
pub fn signed_angle(a: DVec3, b: DVec3, axis: DVec3) -> Result<f64, BuildError> {
    let a_perp = a - axis * a.dot(axis);
    let b_perp = b - axis * b.dot(axis);
    if a_perp.mag_sq() < EPSILON_SQ || b_perp.mag_sq() < EPSILON_SQ {
        return Err(BuildError::DegenerateVector {
            context: "signed angle",
        });
    }
    Ok(axis
        .dot(a_perp.cross(b_perp))
        .atan2(a_perp.dot(b_perp)))
}
