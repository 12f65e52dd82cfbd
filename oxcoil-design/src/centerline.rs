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
//! The discrete centerline that the double helix is wound around.

use crate::errors::BuildError;
use crate::parameters::Parameters;
use ultraviolet::DVec3;

/// Parses the text of an xyz file, one point per row given as three
/// whitespace separated coordinates. Blank lines and `#` comments are
/// ignored.
pub fn parse_xyz(text: &str) -> Result<Vec<DVec3>, BuildError> {
    let mut points = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let row = raw.split('#').next().unwrap_or("");
        if row.trim().is_empty() {
            continue;
        }
        let mut coordinates = [0.; 3];
        let mut fields = row.split_whitespace();
        for coordinate in coordinates.iter_mut() {
            let field = fields.next().ok_or_else(|| BuildError::MalformedPoint {
                line,
                detail: String::from("expected three coordinates"),
            })?;
            *coordinate = field.parse().map_err(|_| BuildError::MalformedPoint {
                line,
                detail: format!("cannot parse {:?} as a number", field),
            })?;
        }
        if fields.next().is_some() {
            return Err(BuildError::MalformedPoint {
                line,
                detail: String::from("expected three coordinates"),
            });
        }
        points.push(DVec3::new(
            coordinates[0],
            coordinates[1],
            coordinates[2],
        ));
    }
    Ok(points)
}

/// An ordered polyline, optionally closed into a loop. One nucleotide pair
/// will be placed at every point.
#[derive(Clone, Debug)]
pub struct Centerline {
    points: Vec<DVec3>,
    closed: bool,
}

impl Centerline {
    pub fn from_points(points: Vec<DVec3>, closed: bool) -> Result<Self, BuildError> {
        if points.len() < 2 {
            return Err(BuildError::InsufficientPoints {
                found: points.len(),
                required: 2,
            });
        }
        Ok(Self { points, closed })
    }

    /// Rescales the curve so that consecutive points sit one helical rise
    /// apart, taking the first segment as the reference length.
    pub fn scale_to_rise(&mut self, parameters: &Parameters) -> Result<(), BuildError> {
        let reference = (self.points[1] - self.points[0]).mag();
        if reference == 0. {
            return Err(BuildError::DegenerateCurve {
                index: 0,
                detail: String::from("coincident consecutive points"),
            });
        }
        let scale = parameters.rise / reference;
        for point in self.points.iter_mut() {
            *point = *point * scale;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn point(&self, i: usize) -> DVec3 {
        self.points[i]
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of segments joining consecutive points, including the closing
    /// segment of a closed curve.
    pub fn nb_segments(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Vector from point `i` to its successor, wrapping around the end of a
    /// closed curve.
    pub fn segment(&self, i: usize) -> DVec3 {
        let next = (i + 1) % self.points.len();
        self.points[next] - self.points[i]
    }

    /// Midpoint of the segment starting at point `i`.
    pub fn segment_middle(&self, i: usize) -> DVec3 {
        let next = (i + 1) % self.points.len();
        (self.points[next] + self.points[i]) * 0.5
    }

    /// Dimensions of the axis-aligned bounding box of the points.
    pub fn extent(&self) -> DVec3 {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for point in self.points.iter() {
            min = min.min_by_component(*point);
            max = max.max_by_component(*point);
        }
        max - min
    }
}
