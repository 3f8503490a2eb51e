// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/testutil.rs - Builders for synthetic Rive files used in tests.
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

use crate::toc::FieldType;

pub fn encode_var_uint(mut value: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
    buf
}

/// Appends Rive primitives to a byte buffer.
#[derive(Debug, Default)]
pub struct RiveBuilder {
    pub bytes: Vec<u8>,
}

impl RiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a runtime file with the magic and header scalars.
    pub fn header(major: u64, minor: u64, fingerprint: u64) -> Self {
        let mut builder = Self::new();
        builder.bytes.extend_from_slice(b"RIVE");
        builder.var_uint(major).var_uint(minor).var_uint(fingerprint);
        builder
    }

    pub fn var_uint(&mut self, value: u64) -> &mut Self {
        self.bytes.extend(encode_var_uint(value));
        self
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.var_uint(value.len() as u64);
        self.bytes.extend_from_slice(value.as_bytes());
        self
    }

    pub fn f32(&mut self, value: f32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Appends a table of contents typing each key.
    pub fn toc(&mut self, entries: &[(u64, FieldType)]) -> &mut Self {
        for (key, _) in entries {
            self.var_uint(*key);
        }
        self.var_uint(0);
        for chunk in entries.chunks(4) {
            let word = chunk
                .iter()
                .enumerate()
                .fold(0u32, |word, (slot, (_, field_type))| {
                    let bits: u32 = match field_type {
                        FieldType::Uint => 0,
                        FieldType::String => 1,
                        FieldType::Double => 2,
                        FieldType::Color => 3,
                    };
                    word | (bits << (slot * 2))
                });
            self.bytes.extend_from_slice(&word.to_le_bytes());
        }
        self
    }

    /// Appends an artboard object using the current type and property keys.
    pub fn artboard(&mut self, name: &str, width: f32, height: f32) -> &mut Self {
        self.var_uint(1);
        self.var_uint(4).string(name);
        self.var_uint(7).f32(width);
        self.var_uint(8).f32(height);
        self.var_uint(0)
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
