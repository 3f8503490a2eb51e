// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/toc.rs - Table of contents and field-type resolution for Rive files.
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
 * # `toc` Module
 *
 * Files with a major version of 7 or later carry a table of contents right
 * after the header scalars. It lists every property key used in the file,
 * followed by a packed bitmap giving each key's field type:
 *
 * ```text
 * varuint* property keys, terminated by a 0 key
 * u32le*   2 bits per key, 4 keys per word, starting at bit 0
 * ```
 *
 * [FieldTypeTable] combines that table with the built-in
 * [crate::schema::KNOWN_PROPERTY_FIELD_TYPES] so that properties the walker
 * does not care about can be skipped.
 */

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::error::{Result, RiveError};
use crate::reader::BinaryReader;
use crate::schema::KNOWN_PROPERTY_FIELD_TYPES;

/// Keys sharing one bitmap word.
const KEYS_PER_WORD: usize = 4;

/// The wire encoding of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Unsigned varuint.
    Uint,
    /// Varuint length followed by that many UTF-8 bytes.
    String,
    /// Little-endian 32-bit float.
    Double,
    /// Color, encoded as a varuint.
    Color,
}

impl FieldType {
    /// Converts a 2-bit field-type tag to a [FieldType].
    pub fn from_bits(bits: u32) -> Self {
        match bits & 3 {
            0 => FieldType::Uint,
            1 => FieldType::String,
            2 => FieldType::Double,
            _ => FieldType::Color,
        }
    }

    /// Advances `reader` past one value of this type.
    pub fn skip(self, reader: &mut BinaryReader<'_>) {
        match self {
            FieldType::Uint | FieldType::Color => {
                reader.read_var_uint();
            }
            FieldType::String => reader.skip_string(),
            FieldType::Double => reader.skip(4),
        }
    }
}

/// Property key to field type lookup for a single parse.
#[derive(Debug, Default)]
pub struct FieldTypeTable {
    toc: HashMap<u64, FieldType>,
}

impl FieldTypeTable {
    /// Creates a table backed only by the built-in field types.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Reads a table of contents from `reader`, which must be positioned
    /// right after the fingerprint.
    ///
    /// Never fails. If the bitmap is cut short, keys whose bits could not be
    /// read are left out and fall back to the built-in table.
    pub fn read(reader: &mut BinaryReader<'_>) -> Self {
        let mut property_keys = Vec::new();
        while !reader.is_at_end() {
            let property_key = reader.read_var_uint();
            if property_key == 0 {
                break;
            }
            property_keys.push(property_key);
        }
        trace!("ToC lists {} property keys", property_keys.len());

        let mut toc = HashMap::with_capacity(property_keys.len());
        let mut current_word = 0;

        for (index, property_key) in property_keys.iter().enumerate() {
            let slot = index % KEYS_PER_WORD;
            if slot == 0 {
                current_word = match reader.read_u32() {
                    Ok(word) => word,
                    Err(error) => {
                        warn!(
                            "ToC bitmap truncated after {} of {} keys: {}",
                            index,
                            property_keys.len(),
                            error
                        );
                        break;
                    }
                };
            }
            toc.insert(*property_key, FieldType::from_bits(current_word >> (slot * 2)));
        }

        debug!("Read ToC with {} typed property keys", toc.len());
        Self { toc }
    }

    /// Number of keys typed by the file's own table of contents.
    pub fn len(&self) -> usize {
        self.toc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toc.is_empty()
    }

    /// Looks up a property's field type, preferring the file's table of
    /// contents over the built-in table.
    pub fn resolve(&self, property_key: u64) -> Option<FieldType> {
        self.toc
            .get(&property_key)
            .or_else(|| KNOWN_PROPERTY_FIELD_TYPES.get(&property_key))
            .copied()
    }

    /// Skips the value of `property_key` at the reader's position.
    ///
    /// Fails if the key's field type is unknown, in which case the reader is
    /// left where it was and the stream can no longer be followed.
    pub fn skip_value(&self, reader: &mut BinaryReader<'_>, property_key: u64) -> Result<()> {
        let field_type = self
            .resolve(property_key)
            .ok_or_else(|| RiveError::UnknownPropertyType {
                key: property_key,
                offset: reader.position(),
            })?;
        field_type.skip(reader);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_bits() {
        assert_eq!(FieldType::from_bits(0), FieldType::Uint);
        assert_eq!(FieldType::from_bits(1), FieldType::String);
        assert_eq!(FieldType::from_bits(2), FieldType::Double);
        assert_eq!(FieldType::from_bits(3), FieldType::Color);
        assert_eq!(FieldType::from_bits(0b1110), FieldType::Double);
    }

    #[test]
    fn test_read_toc() {
        // Keys 300, 301, 302, 303, 304, then the terminator.
        let mut data = vec![0xAC, 0x02, 0xAD, 0x02, 0xAE, 0x02, 0xAF, 0x02, 0xB0, 0x02, 0x00];
        // Uint, String, Double, Color
        data.extend_from_slice(&0b11_10_01_00u32.to_le_bytes());
        // Double
        data.extend_from_slice(&0b10u32.to_le_bytes());
        data.push(0x42);

        let mut reader = BinaryReader::new(&data);
        let table = FieldTypeTable::read(&mut reader);

        assert_eq!(table.len(), 5);
        assert_eq!(table.resolve(300), Some(FieldType::Uint));
        assert_eq!(table.resolve(301), Some(FieldType::String));
        assert_eq!(table.resolve(302), Some(FieldType::Double));
        assert_eq!(table.resolve(303), Some(FieldType::Color));
        assert_eq!(table.resolve(304), Some(FieldType::Double));
        assert_eq!(reader.position(), data.len() - 1);
    }

    #[test]
    fn test_read_toc_truncated_bitmap() {
        let mut data = vec![0x01, 0x02, 0x03, 0x04, 0xAC, 0x02, 0x00];
        data.extend_from_slice(&0xFFu32.to_le_bytes());
        data.extend_from_slice(&[0x00, 0x00]);

        let mut reader = BinaryReader::new(&data);
        let table = FieldTypeTable::read(&mut reader);

        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve(1), Some(FieldType::Color));
        assert_eq!(table.resolve(300), None);
    }

    #[test]
    fn test_read_empty_toc() {
        let data = [0x00, 0x17];
        let mut reader = BinaryReader::new(&data);
        let table = FieldTypeTable::read(&mut reader);
        assert!(table.is_empty());
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_toc_overrides_builtin() {
        // Key 7 is a Double in the built-in table; the file says Uint.
        let mut data = vec![0x07, 0x00];
        data.extend_from_slice(&0u32.to_le_bytes());
        let table = FieldTypeTable::read(&mut BinaryReader::new(&data));

        assert_eq!(table.resolve(7), Some(FieldType::Uint));
        assert_eq!(table.resolve(8), Some(FieldType::Double));
        assert_eq!(table.resolve(4), Some(FieldType::String));
        assert_eq!(table.resolve(9999), None);
    }

    #[test]
    fn test_skip_value() {
        let table = FieldTypeTable::builtin();
        // name (string), x (float), parentId (uint), then an unknown key.
        let data = [0x03, b'a', b'b', b'c', 0, 0, 0x80, 0x3F, 0x96, 0x01];
        let mut reader = BinaryReader::new(&data);

        table.skip_value(&mut reader, 4).unwrap();
        assert_eq!(reader.position(), 4);
        table.skip_value(&mut reader, 13).unwrap();
        assert_eq!(reader.position(), 8);
        table.skip_value(&mut reader, 5).unwrap();
        assert_eq!(reader.position(), 10);

        assert!(matches!(
            table.skip_value(&mut reader, 9999),
            Err(RiveError::UnknownPropertyType { key: 9999, offset: 10 })
        ));
        assert_eq!(reader.position(), 10);
    }
}
