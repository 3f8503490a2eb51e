// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the Rive metadata library.
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

use thiserror::Error;

/// The error type for all fallible operations in this crate.
///
/// Only [RiveError::Io] ever escapes [crate::metadata::parse]. The structural
/// variants are produced while walking a buffer and are absorbed into a
/// best-effort [crate::metadata::FileMetadata].
#[derive(Debug, Error)]
pub enum RiveError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixed-size read ran past the end of the buffer.
    #[error("Unexpected end of data at offset {offset}: needed {needed} bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A property key was found that neither the table of contents nor the
    /// built-in table knows how to skip.
    #[error("Unknown field type for property key {key} at offset {offset}")]
    UnknownPropertyType { key: u64, offset: usize },

    /// Writing a CSV report failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A convenience `Result` alias using [RiveError].
pub type Result<T> = std::result::Result<T, RiveError>;
