// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/reader.rs - Primitive decoders for the Rive binary format.
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
 * # `reader` Module
 *
 * Low-level decoding of the primitives used by Rive runtime files: LEB128
 * variable-length unsigned integers, length-prefixed UTF-8 strings, and
 * little-endian 32-bit words and floats.
 *
 * The free functions [decode_var_uint] and [decode_string] are pure functions
 * of `(data, offset)` that report how many bytes they consumed. [BinaryReader]
 * wraps them with a forward-only cursor.
 *
 * None of these decoders fail on truncated input. A cursor may end up past
 * the end of the buffer, and callers are expected to stop once
 * [BinaryReader::is_at_end] returns `true`.
 */

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, RiveError};

/// The maximum number of bytes a single varuint may span before decoding
/// gives up and returns the partial value.
pub const VAR_UINT_MAX_BYTES: usize = 6;

/// Decodes a little-endian base-128 varuint starting at `offset`.
///
/// Returns `(value, bytes_consumed)`. Decoding stops at the first byte with a
/// clear high bit, after [VAR_UINT_MAX_BYTES] bytes, or at the end of `data`,
/// whichever comes first. In the last two cases the value accumulated so far
/// is returned.
pub fn decode_var_uint(data: &[u8], offset: usize) -> (u64, usize) {
    let mut value: u64 = 0;
    let mut consumed = 0;

    for &byte in data.iter().skip(offset).take(VAR_UINT_MAX_BYTES) {
        value |= u64::from(byte & 0x7F) << (7 * consumed);
        consumed += 1;
        if byte & 0x80 == 0 {
            break;
        }
    }

    (value, consumed)
}

/// Decodes a varuint-length-prefixed UTF-8 string starting at `offset`.
///
/// Returns `(string, bytes_consumed)`, where `bytes_consumed` is always the
/// prefix length plus the declared string length. If the declared length runs
/// past the end of `data`, the string is empty but the consumed count is still
/// the declared one, so a cursor skips the truncated region.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn decode_string(data: &[u8], offset: usize) -> (String, usize) {
    let (length, prefix_len) = decode_var_uint(data, offset);
    let length = usize::try_from(length).unwrap_or(usize::MAX);
    let consumed = prefix_len.saturating_add(length);

    let start = offset.saturating_add(prefix_len);
    let value = match start.checked_add(length) {
        Some(end) if end <= data.len() => String::from_utf8_lossy(&data[start..end]).into_owned(),
        _ => String::new(),
    };

    (value, consumed)
}

/// A forward-only cursor over a byte buffer.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` once the cursor has reached or passed the end of the
    /// buffer.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Returns the number of bytes left between the cursor and the end of the
    /// buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Advances the cursor by `count` bytes without reading them. The cursor
    /// may move past the end of the buffer.
    pub fn skip(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    /// Reads a varuint. See [decode_var_uint].
    pub fn read_var_uint(&mut self) -> u64 {
        let (value, consumed) = decode_var_uint(self.data, self.position);
        self.position += consumed;
        value
    }

    /// Reads a length-prefixed string. See [decode_string].
    pub fn read_string(&mut self) -> String {
        let (value, consumed) = decode_string(self.data, self.position);
        self.skip(consumed);
        value
    }

    /// Skips a length-prefixed string without decoding it.
    pub fn skip_string(&mut self) {
        let length = self.read_var_uint();
        self.skip(usize::try_from(length).unwrap_or(usize::MAX));
    }

    /// Reads `count` raw bytes, failing without moving the cursor if fewer
    /// are available.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(RiveError::UnexpectedEof {
                offset: self.position,
                needed: count,
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Reads a little-endian `u32`, failing without moving the cursor if
    /// fewer than 4 bytes are available.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    /// Reads a little-endian `f32`.
    ///
    /// Unlike [BinaryReader::read_u32], the cursor always advances by 4 bytes,
    /// even when the value is truncated and an error is returned.
    pub fn read_f32(&mut self) -> Result<f32> {
        let value = self.read_bytes(4).map(LittleEndian::read_f32);
        if value.is_err() {
            self.skip(4);
        }
        value
    }
}
