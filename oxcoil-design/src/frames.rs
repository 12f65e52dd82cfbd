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
//! Discrete tangents and normals along a centerline.

use crate::centerline::Centerline;
use crate::errors::BuildError;
use ultraviolet::DVec3;

const EPSILON: f64 = 1e-6;

/// A local frame at every point of a centerline.
///
/// The tangent at a point is the unit vector of the segment leaving it. The
/// perpendicular is the unit binormal of the two segments meeting there,
/// which is orthogonal to both. On an open curve the missing directions at
/// the ends are copied from their nearest neighbor.
#[derive(Clone, Debug)]
pub struct FrameField {
    tangents: Vec<DVec3>,
    perpendiculars: Vec<DVec3>,
}

impl FrameField {
    pub fn new(curve: &Centerline) -> Result<Self, BuildError> {
        let n = curve.len();
        if n < 3 {
            return Err(BuildError::InsufficientPoints {
                found: n,
                required: 3,
            });
        }
        let nb_segments = curve.nb_segments();
        let mut segments = Vec::with_capacity(nb_segments);
        for i in 0..nb_segments {
            let segment = curve.segment(i);
            if segment.mag_sq() == 0. {
                return Err(BuildError::DegenerateCurve {
                    index: i,
                    detail: String::from("coincident consecutive points"),
                });
            }
            segments.push(segment);
        }

        let mut tangents: Vec<DVec3> = segments.iter().map(|s| s.normalized()).collect();
        if !curve.is_closed() {
            // one fewer segment than points, the last point reuses the
            // direction it was reached with
            tangents.push(tangents[nb_segments - 1]);
        }

        let mut perpendiculars = vec![DVec3::zero(); n];
        let interior = if curve.is_closed() { 0..n } else { 1..n - 1 };
        for i in interior {
            let previous = segments[(i + nb_segments - 1) % nb_segments];
            let current = segments[i % nb_segments];
            let binormal = previous.cross(current);
            if binormal.mag() < EPSILON * previous.mag() * current.mag() {
                return Err(BuildError::DegenerateCurve {
                    index: i,
                    detail: String::from("three consecutive colinear points"),
                });
            }
            perpendiculars[i] = binormal.normalized();
        }
        if !curve.is_closed() {
            perpendiculars[0] = perpendiculars[1];
            perpendiculars[n - 1] = perpendiculars[n - 2];
        }

        Ok(Self {
            tangents,
            perpendiculars,
        })
    }

    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }

    pub fn tangent(&self, i: usize) -> DVec3 {
        self.tangents[i]
    }

    pub fn perpendicular(&self, i: usize) -> DVec3 {
        self.perpendiculars[i]
    }
}
