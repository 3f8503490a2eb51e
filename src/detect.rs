// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/detect.rs - File format detection for Rive files.
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
 * # `detect` Module
 *
 * Classifies a file as a Rive runtime file (`.riv`), a Rive editor backup
 * (`.rev`), or something else.
 *
 * Runtime files start with the magic `RIVE`. Editor backups have no known
 * signature; they are recognized by an `ART` tag somewhere in the first 16
 * bytes. That check is only approximately reliable and can match unrelated
 * binary data. As a last resort the file extension is used.
 *
 * Bytes are compared as 7-bit ASCII, with the high bit of each byte cleared.
 */

use std::fmt;
use std::path::Path;

use log::debug;

/// Magic bytes at the start of every Rive runtime file.
pub const RIVE_MAGIC: &[u8; 4] = b"RIVE";

/// Marker found near the start of Rive editor backups.
pub const REV_ART_MARKER: &[u8; 3] = b"ART";

/// Size of the window searched for [REV_ART_MARKER].
pub const REV_MARKER_WINDOW: usize = 16;

/// The kind of Rive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Not recognized as a Rive file.
    #[default]
    Unknown,
    /// Runtime export that the Rive runtimes can load.
    Riv,
    /// Editor backup, only loadable by the Rive editor.
    Rev,
}

impl FileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Unknown => "unknown",
            FileFormat::Riv => "riv",
            FileFormat::Rev => "rev",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ascii_window(data: &[u8], len: usize) -> Vec<u8> {
    data.iter().take(len).map(|b| b & 0x7F).collect()
}

/// Returns `true` if `data` starts with [RIVE_MAGIC].
pub fn has_rive_magic(data: &[u8]) -> bool {
    ascii_window(data, RIVE_MAGIC.len()) == RIVE_MAGIC
}

/// Returns `true` if [REV_ART_MARKER] occurs within the first
/// [REV_MARKER_WINDOW] bytes of `data`.
pub fn has_rev_marker(data: &[u8]) -> bool {
    ascii_window(data, REV_MARKER_WINDOW)
        .windows(REV_ART_MARKER.len())
        .any(|window| window == REV_ART_MARKER)
}

/// Classifies a file from the start of its contents, falling back to the
/// extension of `path` when the contents are inconclusive.
pub fn detect(data: &[u8], path: Option<&Path>) -> FileFormat {
    let format = if has_rive_magic(data) {
        FileFormat::Riv
    } else if has_rev_marker(data) {
        FileFormat::Rev
    } else if path.is_some_and(has_rev_extension) {
        debug!("No signature found, using .rev extension");
        FileFormat::Rev
    } else {
        FileFormat::Unknown
    };

    debug!("Detected format: {}", format);
    format
}

fn has_rev_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rev"))
}
