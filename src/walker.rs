// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/walker.rs - Object stream traversal for Rive runtime files.
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
 * # `walker` Module
 *
 * After the header (and table of contents, if any) a runtime file is a flat
 * list of objects:
 *
 * ```text
 * varuint type key          (0 = padding)
 * repeated:
 *     varuint property key  (0 = end of object)
 *     value                 (encoding given by the key's field type)
 * ```
 *
 * [find_first_artboard] walks that list until it finds an artboard with a
 * usable size. Properties of other objects are skipped using a
 * [FieldTypeTable]. A property whose type cannot be resolved ends the walk,
 * since there is no way to tell where the next object begins.
 */

use log::{debug, trace, warn};

use crate::error::Result;
use crate::reader::BinaryReader;
use crate::schema::{HEIGHT_PROPERTY_KEYS, NAME_PROPERTY_KEYS, WIDTH_PROPERTY_KEYS, is_artboard_type};
use crate::toc::FieldTypeTable;

/// The maximum number of objects visited before giving up.
pub const MAX_OBJECTS: usize = 300;

/// Artboard fields discovered during a walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Artboard {
    pub name: String,
    /// Width in logical units, 0 if not found.
    pub width: u32,
    /// Height in logical units, 0 if not found.
    pub height: u32,
}

impl Artboard {
    /// Returns `true` if both dimensions are non-zero.
    pub fn has_size(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// An artboard with both dimensions was found.
    Found,
    /// The buffer ran out.
    EndOfData,
    /// [MAX_OBJECTS] objects were visited.
    ObjectLimit,
    /// A property could not be skipped.
    Abandoned,
}

/// The result of [find_first_artboard].
#[derive(Debug, Clone)]
pub struct ArtboardScan {
    /// Fields collected so far. These may come from more than one artboard if
    /// earlier ones were missing a dimension.
    pub artboard: Artboard,
    pub end: WalkEnd,
    /// Objects visited, including padding markers.
    pub objects_visited: usize,
}

/// Converts a float dimension to whole units, rounding halves up.
fn round_dimension(value: f32) -> u32 {
    // Float to int casts saturate, and NaN becomes 0.
    (f64::from(value) + 0.5).floor() as u32
}

/// Reads the properties of one object up to and including its terminator.
fn read_properties(
    reader: &mut BinaryReader<'_>,
    fields: &FieldTypeTable,
    is_artboard: bool,
    artboard: &mut Artboard,
) -> Result<()> {
    while !reader.is_at_end() {
        let property_key = reader.read_var_uint();
        if property_key == 0 {
            break;
        }

        if is_artboard && NAME_PROPERTY_KEYS.contains(&property_key) {
            artboard.name = reader.read_string();
            trace!("Artboard name: {:?}", artboard.name);
        } else if is_artboard && WIDTH_PROPERTY_KEYS.contains(&property_key) {
            if let Ok(width) = reader.read_f32() {
                artboard.width = round_dimension(width);
            }
        } else if is_artboard && HEIGHT_PROPERTY_KEYS.contains(&property_key) {
            if let Ok(height) = reader.read_f32() {
                artboard.height = round_dimension(height);
            }
        } else {
            fields.skip_value(reader, property_key)?;
        }
    }

    Ok(())
}

/// Walks the object list from the reader's position and returns the first
/// artboard with both dimensions set.
///
/// Never fails; the returned [ArtboardScan] says how the walk ended.
pub fn find_first_artboard(reader: &mut BinaryReader<'_>, fields: &FieldTypeTable) -> ArtboardScan {
    let mut artboard = Artboard::default();
    let mut objects_visited = 0;

    let end = loop {
        if reader.is_at_end() {
            break WalkEnd::EndOfData;
        }
        if objects_visited == MAX_OBJECTS {
            warn!("Gave up after {} objects without finding an artboard", MAX_OBJECTS);
            break WalkEnd::ObjectLimit;
        }
        objects_visited += 1;

        let offset = reader.position();
        let type_key = reader.read_var_uint();
        if type_key == 0 {
            continue;
        }

        let is_artboard = is_artboard_type(type_key);
        trace!("Object type {} at offset {}", type_key, offset);

        let properties = read_properties(reader, fields, is_artboard, &mut artboard);

        if is_artboard && artboard.has_size() {
            debug!(
                "Found artboard {:?} ({}x{}) at offset {}",
                artboard.name, artboard.width, artboard.height, offset
            );
            break WalkEnd::Found;
        }
        if let Err(error) = properties {
            warn!("Stopped reading objects: {}", error);
            break WalkEnd::Abandoned;
        }
    };

    ArtboardScan {
        artboard,
        end,
        objects_visited,
    }
}
