// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Metadata library for Rive .riv and .rev files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `rivemeta` Crate
 *
 * A library for sniffing metadata from Rive runtime files (`.riv`) and Rive
 * editor backups (`.rev`) without loading a Rive runtime.
 *
 * For runtime files it reports the format version, the header fingerprint,
 * and the name and size of the first artboard. Editor backups are only
 * identified, since their layout is not known.
 *
 * The work is split into a few stages:
 *
 * 1. [detect]: Classifies the file from its first bytes.
 * 2. [reader]: Decodes varuints, strings, and fixed-size values.
 * 3. [toc]: Reads the table of contents and resolves property field types.
 * 4. [walker]: Scans the object stream for the first artboard.
 * 5. [metadata]: Assembles everything into a [metadata::FileMetadata].
 *
 * [report] turns the results into display labels and CSV inventories.
 *
 * ## Usage Example
 *
 * ```no_run
 * use rivemeta::metadata::parse;
 * use rivemeta::report::Summary;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let path = std::path::Path::new("example.riv");
 *
 *     // Read and parse the head of the file
 *     let metadata = parse(path)?;
 *
 *     if metadata.is_valid {
 *         let summary = Summary::from_metadata(path, &metadata);
 *         println!("{} [{}] {}", summary.name, summary.format, summary.caption());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

pub mod detect;
pub mod error;
pub mod metadata;
pub mod reader;
pub mod report;
pub mod schema;
pub mod toc;
pub mod walker;

#[cfg(test)]
mod testutil;

pub use detect::FileFormat;
pub use error::{Result, RiveError};
pub use metadata::{FileMetadata, format_file_size, parse, parse_bytes};
