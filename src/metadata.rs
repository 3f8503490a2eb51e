// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/metadata.rs - Metadata extraction for Rive files.
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
 * # `metadata` Module
 *
 * This module ties format detection, the table of contents, and the object
 * walk together into a single [FileMetadata] record.
 *
 * Parsing is best-effort. Only a failure to open or read the file is reported
 * as an error; malformed or truncated contents produce whatever metadata
 * could be recovered before the problem.
 *
 * ## Usage Example
 *
 * ```no_run
 * use rivemeta::metadata::{format_file_size, parse};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let metadata = parse("example.riv")?;
 *
 *     println!("Format: {}", metadata.format);
 *     println!("Version: {}.{}", metadata.major_version, metadata.minor_version);
 *     println!("Artboard: {} ({}x{})", metadata.artboard_name, metadata.width, metadata.height);
 *     println!("Size: {}", format_file_size(metadata.file_size));
 *
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::detect::{FileFormat, RIVE_MAGIC, detect};
use crate::error::Result;
use crate::reader::BinaryReader;
use crate::toc::FieldTypeTable;
use crate::walker::find_first_artboard;

/// Number of bytes read from the start of a file. Everything of interest
/// lives near the head; embedded assets further in are never read.
pub const HEADER_WINDOW: u64 = 65536;

/// First major version with a table of contents.
pub const TOC_MAJOR_VERSION: u64 = 7;

/// Metadata sniffed from a Rive file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// The detected file format.
    pub format: FileFormat,
    /// Whether the format was confidently determined.
    pub is_valid: bool,
    /// Runtime format major version. Only meaningful for [FileFormat::Riv].
    pub major_version: u64,
    /// Runtime format minor version. Only meaningful for [FileFormat::Riv].
    pub minor_version: u64,
    /// File id from the runtime header. Only meaningful for [FileFormat::Riv].
    pub fingerprint: u64,
    /// Width of the first sized artboard, 0 if not found.
    pub width: u32,
    /// Height of the first sized artboard, 0 if not found.
    pub height: u32,
    /// Name of the first sized artboard, empty if not found.
    pub artboard_name: String,
    /// Size of the whole file in bytes.
    pub file_size: u64,
}

impl FileMetadata {
    fn read_runtime(&mut self, data: &[u8]) {
        let mut reader = BinaryReader::new(data);
        reader.skip(RIVE_MAGIC.len());

        self.major_version = reader.read_var_uint();
        self.minor_version = reader.read_var_uint();
        self.fingerprint = reader.read_var_uint();
        debug!(
            "Runtime header: version {}.{}, fingerprint {:#x}",
            self.major_version, self.minor_version, self.fingerprint
        );

        let fields = if self.major_version >= TOC_MAJOR_VERSION {
            FieldTypeTable::read(&mut reader)
        } else {
            FieldTypeTable::builtin()
        };

        let scan = find_first_artboard(&mut reader, &fields);
        debug!(
            "Object walk ended with {:?} after {} objects",
            scan.end, scan.objects_visited
        );

        self.artboard_name = scan.artboard.name;
        self.width = scan.artboard.width;
        self.height = scan.artboard.height;
    }
}

/// Extracts metadata from the start of a file.
///
/// # Arguments
///
/// * `data` - The first bytes of the file, usually up to [HEADER_WINDOW].
/// * `path` - The file's path, used for the extension fallback.
/// * `file_size` - The size of the whole file in bytes.
pub fn parse_bytes(data: &[u8], path: Option<&Path>, file_size: u64) -> FileMetadata {
    let format = detect(data, path);
    let mut metadata = FileMetadata {
        format,
        is_valid: format != FileFormat::Unknown,
        file_size,
        ..Default::default()
    };

    if format == FileFormat::Riv {
        metadata.read_runtime(data);
    }

    metadata
}

/// Reads the head of a file and extracts its metadata.
///
/// # Returns
///
/// A `Result` containing the [FileMetadata], or an I/O error if the file
/// could not be opened or read. Unrecognized files are returned with
/// `is_valid` set to `false`.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<FileMetadata> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();

    let mut buffer = Vec::with_capacity(file_size.min(HEADER_WINDOW) as usize);
    file.take(HEADER_WINDOW).read_to_end(&mut buffer)?;
    debug!("Read {} of {} bytes from {:?}", buffer.len(), file_size, path);

    Ok(parse_bytes(&buffer, Some(path), file_size))
}

/// Formats a byte count for display, e.g. `"500 B"`, `"2.0 KB"`, `"5.0 MB"`.
///
/// Kilobytes and megabytes are rounded to one decimal place, with halves
/// rounded up.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    let (unit, divisor) = match bytes {
        0..KIB => return format!("{} B", bytes),
        KIB..MIB => ("KB", KIB),
        _ => ("MB", MIB),
    };

    let divisor = u128::from(divisor);
    let tenths = (u128::from(bytes) * 10 + divisor / 2) / divisor;
    format!("{}.{} {}", tenths / 10, tenths % 10, unit)
}
