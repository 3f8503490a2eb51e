// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/report.rs - Display labels and CSV inventories for Rive files.
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
 * # `report` Module
 *
 * Helpers for presenting [FileMetadata]: short labels suitable for a
 * thumbnail or file-info panel, and a CSV inventory covering many files.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::io;
 * use std::path::Path;
 *
 * use rivemeta::metadata::parse;
 * use rivemeta::report::write_csv;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let path = Path::new("example.riv");
 *     let metadata = parse(path)?;
 *
 *     write_csv(io::stdout(), [(path, &metadata)])?;
 *
 *     Ok(())
 * }
 * ```
 */

use std::io::Write;
use std::path::Path;

use crate::detect::FileFormat;
use crate::error::Result;
use crate::metadata::{FileMetadata, format_file_size};

/// File names longer than this are shortened by [display_name].
const MAX_DISPLAY_NAME_CHARS: usize = 24;

/// Characters kept from a shortened file name, before the ellipsis.
const TRUNCATED_NAME_CHARS: usize = 21;

const CSV_HEADER: [&str; 10] = [
    "path",
    "format",
    "valid",
    "version",
    "fingerprint",
    "artboard",
    "width",
    "height",
    "bytes",
    "size",
];

/// Shortens a file name to fit a label.
pub fn display_name(file_name: &str) -> String {
    if file_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        let mut short: String = file_name.chars().take(TRUNCATED_NAME_CHARS).collect();
        short.push_str("...");
        short
    } else {
        file_name.to_string()
    }
}

/// Formats the artboard size as `"W × H"`, or an empty string if either
/// dimension is unknown.
pub fn display_dimensions(metadata: &FileMetadata) -> String {
    if metadata.width > 0 && metadata.height > 0 {
        format!("{} × {}", metadata.width, metadata.height)
    } else {
        String::new()
    }
}

/// Formats the runtime version as `"major.minor"`, or an empty string for
/// anything other than a runtime file.
pub fn display_version(metadata: &FileMetadata) -> String {
    match metadata.format {
        FileFormat::Riv => format!("{}.{}", metadata.major_version, metadata.minor_version),
        _ => String::new(),
    }
}

/// Labels describing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub format: FileFormat,
    /// File name, shortened with [display_name].
    pub name: String,
    /// See [display_dimensions].
    pub dimensions: String,
    /// See [format_file_size].
    pub size: String,
}

impl Summary {
    pub fn from_metadata(path: &Path, metadata: &FileMetadata) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        Self {
            format: metadata.format,
            name: display_name(&file_name),
            dimensions: display_dimensions(metadata),
            size: format_file_size(metadata.file_size),
        }
    }

    /// The dimensions and size joined for a single caption line.
    pub fn caption(&self) -> String {
        match (self.dimensions.is_empty(), self.size.is_empty()) {
            (false, false) => format!("{}  ·  {}", self.dimensions, self.size),
            (false, true) => self.dimensions.clone(),
            _ => self.size.clone(),
        }
    }
}

/// Writes a CSV inventory with a header row and one row per file.
pub fn write_csv<'a, W, I>(writer: W, entries: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a Path, &'a FileMetadata)>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (path, metadata) in entries {
        let record = [
            path.to_string_lossy().into_owned(),
            metadata.format.to_string(),
            metadata.is_valid.to_string(),
            display_version(metadata),
            metadata.fingerprint.to_string(),
            metadata.artboard_name.clone(),
            metadata.width.to_string(),
            metadata.height.to_string(),
            metadata.file_size.to_string(),
            format_file_size(metadata.file_size),
        ];
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riv_metadata() -> FileMetadata {
        FileMetadata {
            format: FileFormat::Riv,
            is_valid: true,
            major_version: 7,
            minor_version: 2,
            fingerprint: 99,
            width: 1920,
            height: 1080,
            artboard_name: "Main, \"intro\"".to_string(),
            file_size: 2048,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("short.riv"), "short.riv");
        assert_eq!(display_name("exactly_twenty_four_.riv"), "exactly_twenty_four_.riv");
        assert_eq!(
            display_name("a_very_long_animation_name.riv"),
            "a_very_long_animation..."
        );
        assert_eq!(
            display_name("动画动画动画动画动画动画动画动画动画动画动画动画.riv"),
            "动画动画动画动画动画动画动画动画动画动画动..."
        );
    }

    #[test]
    fn test_display_dimensions() {
        let mut metadata = riv_metadata();
        assert_eq!(display_dimensions(&metadata), "1920 × 1080");
        metadata.height = 0;
        assert_eq!(display_dimensions(&metadata), "");
    }

    #[test]
    fn test_display_version() {
        assert_eq!(display_version(&riv_metadata()), "7.2");
        let rev = FileMetadata {
            format: FileFormat::Rev,
            is_valid: true,
            ..Default::default()
        };
        assert_eq!(display_version(&rev), "");
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_metadata(Path::new("/tmp/anim.riv"), &riv_metadata());
        assert_eq!(summary.name, "anim.riv");
        assert_eq!(summary.caption(), "1920 × 1080  ·  2.0 KB");

        let rev = FileMetadata {
            format: FileFormat::Rev,
            is_valid: true,
            file_size: 500,
            ..Default::default()
        };
        let summary = Summary::from_metadata(Path::new("backup.rev"), &rev);
        assert_eq!(summary.format, FileFormat::Rev);
        assert_eq!(summary.caption(), "500 B");
    }

    #[test]
    fn test_write_csv() {
        let riv = riv_metadata();
        let unknown = FileMetadata {
            file_size: 10,
            ..Default::default()
        };
        let mut output = Vec::new();
        write_csv(
            &mut output,
            [
                (Path::new("anim.riv"), &riv),
                (Path::new("notes.txt"), &unknown),
            ],
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "path,format,valid,version,fingerprint,artboard,width,height,bytes,size",
                "anim.riv,riv,true,7.2,99,\"Main, \"\"intro\"\"\",1920,1080,2048,2.0 KB",
                "notes.txt,unknown,false,,0,,0,0,10,10 B",
            ]
        );
    }
}
