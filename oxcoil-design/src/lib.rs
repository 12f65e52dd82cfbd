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
//! Winding DNA around arbitrary 3d curves.
//!
//! This crate turns a polyline centerline into a nucleotide [`System`]
//! ready to be simulated with oxDNA. The centerline is rescaled so that its
//! points are one helical rise apart, a frame is attached to every point,
//! and a duplex is wound around the curve with a per-base twist chosen so
//! that the linking number of a closed structure realizes the requested
//! supercoiling density. [`generate`] runs the whole pipeline.

#[macro_use]
extern crate serde_derive;
extern crate serde;

pub use ultraviolet;
use ultraviolet::DVec3;

mod assembly;
pub use assembly::{assemble, AssemblyOptions};
pub mod cadnano;
mod centerline;
pub use centerline::{parse_xyz, Centerline};
mod errors;
pub use errors::BuildError;
mod frames;
pub use frames::FrameField;
mod helix;
pub use helix::{wind_duplex, HelixFrames};
mod parameters;
pub use parameters::Parameters;
pub mod rotation;
mod sequence;
pub use sequence::{parse_sequence, random_sequence, Base};
mod system;
pub use system::{Nucleotide, Strand, System};
pub mod topology;

#[cfg(test)]
mod tests;

/// Builds the nucleotide system wound around a centerline.
///
/// The curve keeps the shape given by `points` but is rescaled so that
/// consecutive points sit one rise apart. Its writhe, and the linking
/// number realizing the requested supercoiling, are computed before the
/// backbones are placed, so that the twist left in the structure accounts
/// for the bending of its axis.
pub fn generate(
    points: Vec<DVec3>,
    options: &AssemblyOptions,
    parameters: &Parameters,
) -> Result<System, BuildError> {
    options.validate()?;
    let mut centerline = Centerline::from_points(points, options.closed)?;
    centerline.scale_to_rise(parameters)?;
    let frames = FrameField::new(&centerline)?;

    let writhe = topology::writhe(&centerline);
    let topology = topology::solve_linking(
        centerline.len(),
        writhe,
        options.supercoiling,
        options.writhe_offset,
        parameters,
    );
    log::info!(
        "Wr = {:.4}, Lk = {}, Tw = {:.4} ({:.4} rad per base)",
        topology.writhe,
        topology.linking_number,
        topology.twist,
        topology.twist_per_base,
    );

    let helix = helix::wind_duplex(&centerline, &frames, &topology, parameters)?;
    let mut rng = options.rng();
    let bases = match options.sequence.as_deref() {
        Some(text) => parse_sequence(text, centerline.len())?,
        None => random_sequence(&mut rng, centerline.len()),
    };
    Ok(assemble(
        &centerline,
        &frames,
        &helix,
        &bases,
        options,
        parameters,
    ))
}
