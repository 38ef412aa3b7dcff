// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for IFC data representation

use crate::IfcType;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Type-safe entity identifier
///
/// Wraps the raw IFC entity ID (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Default, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Handle to a model opened in an engine
///
/// Valid between `open_model` and `close_model`. Handles are never reused
/// within one engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, PartialOrd, Ord)]
pub struct ModelId(pub u32);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded attribute value
///
/// Represents any value that can appear in an IFC entity's attribute list.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AttributeValue {
    /// Null value ($)
    #[default]
    Null,
    /// Derived value (*)
    Derived,
    /// Entity reference (#123)
    EntityRef(EntityId),
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value, with STEP quote escapes resolved
    String(String),
    /// Enumeration value (.VALUE.)
    Enum(String),
    /// List of values
    List(Vec<AttributeValue>),
    /// Typed value like IFCLABEL('text')
    TypedValue(String, Vec<AttributeValue>),
}

/// Value kind codes used in the JSON output
///
/// These match the numbering web-ifc uses for line values, so dumps look
/// the same as the ones produced by the JavaScript toolchain.
pub mod value_kind {
    pub const STRING: u8 = 1;
    pub const LABEL: u8 = 2;
    pub const ENUM: u8 = 3;
    pub const REAL: u8 = 4;
    pub const REF: u8 = 5;
    pub const INTEGER: u8 = 10;
}

impl AttributeValue {
    /// Try to get as entity reference
    pub fn as_entity_ref(&self) -> Option<EntityId> {
        match self {
            AttributeValue::EntityRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_string(),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_float(),
            _ => None,
        }
    }

    /// Try to get as enum string
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            AttributeValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Check if this is a null or derived value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null | AttributeValue::Derived)
    }

    /// Kind code for scalar values, `None` for null, lists and typed values
    pub fn kind_code(&self) -> Option<u8> {
        match self {
            AttributeValue::String(_) => Some(value_kind::STRING),
            AttributeValue::Enum(_) | AttributeValue::Bool(_) => Some(value_kind::ENUM),
            AttributeValue::Float(_) => Some(value_kind::REAL),
            AttributeValue::EntityRef(_) => Some(value_kind::REF),
            AttributeValue::Integer(_) => Some(value_kind::INTEGER),
            _ => None,
        }
    }
}

/// Bare payload of a value without the `{type, value}` envelope
struct Payload<'a>(&'a AttributeValue);

impl Serialize for Payload<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            AttributeValue::String(s) | AttributeValue::Enum(s) => serializer.serialize_str(s),
            AttributeValue::Bool(b) => serializer.serialize_str(if *b { "T" } else { "F" }),
            AttributeValue::Float(f) => serializer.serialize_f64(*f),
            AttributeValue::Integer(i) => serializer.serialize_i64(*i),
            AttributeValue::EntityRef(id) => serializer.serialize_u32(id.0),
            other => other.serialize(serializer),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Null | AttributeValue::Derived => serializer.serialize_none(),
            AttributeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AttributeValue::TypedValue(label, args) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", &value_kind::LABEL)?;
                map.serialize_entry("label", label)?;
                match args.as_slice() {
                    [single] => {
                        if let Some(code) = single.kind_code() {
                            map.serialize_entry("valueType", &code)?;
                        }
                        map.serialize_entry("value", &Payload(single))?;
                    }
                    _ => map.serialize_entry("value", args)?,
                }
                map.end()
            }
            scalar => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &scalar.kind_code())?;
                map.serialize_entry("value", &Payload(scalar))?;
                map.end()
            }
        }
    }
}

/// Decoded IFC entity
///
/// Represents a fully decoded IFC entity with its ID, type, and attribute values.
#[derive(Clone, Debug)]
pub struct DecodedEntity {
    /// Entity ID
    pub id: EntityId,
    /// Entity type
    pub ifc_type: IfcType,
    /// Attribute values in order
    pub attributes: Vec<AttributeValue>,
}

impl DecodedEntity {
    /// Get attribute at index
    pub fn get(&self, index: usize) -> Option<&AttributeValue> {
        self.attributes.get(index)
    }

    /// Get string at index
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_string())
    }

    /// Get entity reference at index
    pub fn get_ref(&self, index: usize) -> Option<EntityId> {
        self.get(index).and_then(|v| v.as_entity_ref())
    }
}

/// Model metadata extracted from the IFC header
#[derive(Clone, Debug, Default, Serialize)]
pub struct ModelMetadata {
    /// IFC schema version (e.g., "IFC2X3", "IFC4", "IFC4X3")
    pub schema_version: String,
    /// Originating system (CAD application)
    pub originating_system: Option<String>,
    /// Preprocessor version
    pub preprocessor_version: Option<String>,
    /// File name from header
    pub file_name: Option<String>,
    /// First entry of FILE_DESCRIPTION
    pub file_description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Organization
    pub organization: Option<String>,
    /// Timestamp
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_json_shape() {
        let value = AttributeValue::String("Wall".into());
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": 1, "value": "Wall"})
        );

        let value = AttributeValue::EntityRef(EntityId(12));
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": 5, "value": 12})
        );

        let value = AttributeValue::Enum("ELEMENT".into());
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": 3, "value": "ELEMENT"})
        );
    }

    #[test]
    fn test_null_and_derived_are_null() {
        assert_eq!(serde_json::to_value(AttributeValue::Null).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(AttributeValue::Derived).unwrap(), json!(null));
    }

    #[test]
    fn test_typed_value_json_shape() {
        let value = AttributeValue::TypedValue(
            "IFCLABEL".into(),
            vec![AttributeValue::String("Concrete".into())],
        );
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": 2, "label": "IFCLABEL", "valueType": 1, "value": "Concrete"})
        );
    }

    #[test]
    fn test_list_json_shape() {
        let value = AttributeValue::List(vec![
            AttributeValue::EntityRef(EntityId(3)),
            AttributeValue::Float(0.5),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!([{"type": 5, "value": 3}, {"type": 4, "value": 0.5}])
        );
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "#42");
        assert_eq!(ModelId(1).to_string(), "1");
    }
}
