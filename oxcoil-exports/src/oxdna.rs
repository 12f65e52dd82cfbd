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
use oxcoil_design::ultraviolet::DVec3;
use oxcoil_design::System;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct OxDnaNucl {
    position: DVec3,
    backbone_base: DVec3,
    normal: DVec3,
    velocity: DVec3,
    angular_velocity: DVec3,
}

pub struct OxDnaConfig {
    time: f64,
    box_size: DVec3,
    /// Etot, U and K
    kinetic_energies: [f64; 3],
    nucls: Vec<OxDnaNucl>,
}

impl OxDnaConfig {
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), std::io::Error> {
        writeln!(&mut out, "t = {}", self.time)?;
        writeln!(
            &mut out,
            "b = {} {} {}",
            self.box_size.x, self.box_size.y, self.box_size.z
        )?;
        writeln!(
            &mut out,
            "E = {} {} {}",
            self.kinetic_energies[0], self.kinetic_energies[1], self.kinetic_energies[2]
        )?;
        for n in self.nucls.iter() {
            writeln!(
                &mut out,
                "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
                n.position.x,
                n.position.y,
                n.position.z,
                n.backbone_base.x,
                n.backbone_base.y,
                n.backbone_base.z,
                n.normal.x,
                n.normal.y,
                n.normal.z,
                n.velocity.x,
                n.velocity.y,
                n.velocity.z,
                n.angular_velocity.x,
                n.angular_velocity.y,
                n.angular_velocity.z,
            )?;
        }
        Ok(())
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut file = BufWriter::new(std::fs::File::create(path)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}

pub struct OxDnaTopology {
    nb_nucl: usize,
    nb_strand: usize,
    bounds: Vec<OxDnaBound>,
}

impl OxDnaTopology {
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), std::io::Error> {
        writeln!(&mut out, "{} {}", self.nb_nucl, self.nb_strand)?;
        for bound in self.bounds.iter() {
            writeln!(
                &mut out,
                "{} {} {} {}",
                bound.strand_id, bound.base, bound.prime5, bound.prime3
            )?;
        }
        Ok(())
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut file = BufWriter::new(std::fs::File::create(path)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}

struct OxDnaBound {
    strand_id: usize,
    base: char,
    prime5: isize,
    prime3: isize,
}

/// Flattens a system into an oxDNA configuration and topology.
///
/// Nucleotides are numbered in the order they appear, strand by strand, and
/// strands are numbered starting from 1. The 5' and 3' neighbor columns of
/// the topology hold -1 at the ends of a linear strand, while a cyclic
/// strand is wired back onto its first nucleotide.
pub fn to_oxdna(system: &System) -> (OxDnaConfig, OxDnaTopology) {
    let mut nucls = Vec::with_capacity(system.nb_nucleotides());
    let mut bounds: Vec<OxDnaBound> = Vec::with_capacity(system.nb_nucleotides());
    for (strand_idx, strand) in system.strands().iter().enumerate() {
        let strand_id = strand_idx + 1;
        let first = nucls.len() as isize;
        let mut prev_nucl: Option<isize> = None;
        for nucleotide in strand.nucleotides.iter() {
            let nucl_id = nucls.len() as isize;
            nucls.push(OxDnaNucl {
                position: nucleotide.position,
                backbone_base: nucleotide.backbone_base,
                normal: nucleotide.normal,
                velocity: DVec3::zero(),
                angular_velocity: DVec3::zero(),
            });
            bounds.push(OxDnaBound {
                strand_id,
                base: nucleotide.base.to_char(),
                prime5: prev_nucl.unwrap_or(-1),
                prime3: -1,
            });
            if let Some(prev) = prev_nucl {
                bounds[prev as usize].prime3 = nucl_id;
            }
            prev_nucl = Some(nucl_id);
        }
        if strand.cyclic && !strand.nucleotides.is_empty() {
            let last = nucls.len() as isize - 1;
            bounds[last as usize].prime3 = first;
            bounds[first as usize].prime5 = last;
        }
    }
    let topology = OxDnaTopology {
        nb_nucl: nucls.len(),
        nb_strand: system.strands().len(),
        bounds,
    };
    let config = OxDnaConfig {
        time: 0.,
        box_size: system.box_size,
        kinetic_energies: [0., 0., 0.],
        nucls,
    };
    (config, topology)
}
