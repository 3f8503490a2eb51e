// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/schema.rs - Well-known Rive type and property keys.
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

//! Static tables of the Rive core type keys and property keys this crate
//! understands. Each concept has had two numeric keys across format
//! revisions, and both are recognized.

use phf::{phf_map, phf_set};

use crate::toc::FieldType;

/// Type keys identifying an Artboard object.
pub static ARTBOARD_TYPE_KEYS: phf::Set<u64> = phf_set! { 1u64, 105u64 };

/// `ComponentBase::name` property keys.
pub static NAME_PROPERTY_KEYS: phf::Set<u64> = phf_set! { 4u64, 203u64 };

/// `LayoutComponentBase::width` property keys.
pub static WIDTH_PROPERTY_KEYS: phf::Set<u64> = phf_set! { 7u64, 207u64 };

/// `LayoutComponentBase::height` property keys.
pub static HEIGHT_PROPERTY_KEYS: phf::Set<u64> = phf_set! { 8u64, 208u64 };

/// Field types the runtime knows for structural properties, used when a key
/// is missing from the file's table of contents.
pub static KNOWN_PROPERTY_FIELD_TYPES: phf::Map<u64, FieldType> = phf_map! {
    4u64 => FieldType::String,   // ComponentBase::name
    5u64 => FieldType::Uint,     // ComponentBase::parentId
    7u64 => FieldType::Double,   // LayoutComponentBase::width
    8u64 => FieldType::Double,   // LayoutComponentBase::height
    11u64 => FieldType::Double,  // ArtboardBase::originX
    12u64 => FieldType::Double,  // ArtboardBase::originY
    13u64 => FieldType::Double,  // NodeBase::x
    14u64 => FieldType::Double,  // NodeBase::y
    15u64 => FieldType::Double,  // TransformComponentBase::rotation
    16u64 => FieldType::Double,  // TransformComponentBase::scaleX
    17u64 => FieldType::Double,  // TransformComponentBase::scaleY
    18u64 => FieldType::Double,  // WorldTransformComponentBase::opacity
    19u64 => FieldType::Uint,    // DrawableBase::blendModeValue
    20u64 => FieldType::Uint,    // DrawableBase::drawableFlags
    196u64 => FieldType::Uint,   // LayoutComponentBase::clip
    236u64 => FieldType::Uint,   // ArtboardBase::defaultStateMachineId
};

pub fn is_artboard_type(type_key: u64) -> bool {
    ARTBOARD_TYPE_KEYS.contains(&type_key)
}
