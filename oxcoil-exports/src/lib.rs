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
//! Writing generated nucleotide systems to the file formats of oxDNA.

pub mod oxdna;

use oxcoil_design::System;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A value returned when an export succeeded.
///
/// This means that both the format conversion and the writes to the output
/// files were successful.
pub struct ExportSuccess {
    pub configuration: PathBuf,
    pub topology: PathBuf,
}

impl ExportSuccess {
    /// A message telling that the export succeeded and giving the paths
    /// that were written.
    pub fn message(&self) -> String {
        format!(
            "Successfully exported to\n{}\n{}",
            self.configuration.display(),
            self.topology.display()
        )
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult = Result<ExportSuccess, ExportError>;

/// Writes `system` to the pair of files `<base>.oxdna` and `<base>.top`.
///
/// The extensions are appended to the given base name rather than replacing
/// its extension, so an input named `loop.xyz` produces `loop.xyz.oxdna`
/// and `loop.xyz.top`.
pub fn export_oxdna(system: &System, output_base: &Path) -> ExportResult {
    let configuration = append_extension(output_base, ".oxdna");
    let topology_path = append_extension(output_base, ".top");
    let (config, topology) = oxdna::to_oxdna(system);
    config.write(&configuration)?;
    topology.write(&topology_path)?;
    Ok(ExportSuccess {
        configuration,
        topology: topology_path,
    })
}

fn append_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(extension);
    PathBuf::from(name)
}
