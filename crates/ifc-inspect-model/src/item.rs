// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item records and the ordered result mapping

use crate::{AttributeValue, DecodedEntity, EntityId, IfcType};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// Property record for one item
///
/// Serializes as a flat JSON object: `expressID`, the synthesized `type`
/// (entity class name), then one key per attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRecord {
    /// Entity ID the record was read from
    pub express_id: EntityId,
    /// Entity kind; serialized as the `type` field
    pub ifc_type: IfcType,
    /// Attribute name/value pairs in STEP order
    pub attributes: Vec<(Cow<'static, str>, AttributeValue)>,
}

impl ItemRecord {
    /// Build a record from a decoded entity, naming attributes from the schema
    pub fn from_entity(entity: &DecodedEntity) -> Self {
        let attributes = entity
            .attributes
            .iter()
            .enumerate()
            .map(|(i, value)| (entity.ifc_type.attribute_name(i), value.clone()))
            .collect();

        Self {
            express_id: entity.id,
            ifc_type: entity.ifc_type.clone(),
            attributes,
        }
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the record's type is in the geometry-type set
    pub fn is_geometry(&self) -> bool {
        self.ifc_type.is_geometry()
    }
}

impl Serialize for ItemRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 2))?;
        map.serialize_entry("expressID", &self.express_id.0)?;
        map.serialize_entry("type", &self.ifc_type)?;
        for (name, value) in &self.attributes {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

/// Ordered mapping from item ID to record
///
/// Iteration and serialization follow insertion order, which extraction
/// keeps equal to line order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemMap {
    items: IndexMap<EntityId, ItemRecord>,
}

impl ItemMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own ID, returning the record it replaced
    pub fn insert(&mut self, record: ItemRecord) -> Option<ItemRecord> {
        self.items.insert(record.express_id, record)
    }

    /// Get a record by ID
    pub fn get(&self, id: EntityId) -> Option<&ItemRecord> {
        self.items.get(&id)
    }

    /// Check whether an ID is present
    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// IDs in insertion order
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.items.keys().copied()
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.values()
    }
}

impl Serialize for ItemMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.items.iter().map(|(id, record)| (id.0, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wall(id: u32) -> DecodedEntity {
        DecodedEntity {
            id: EntityId(id),
            ifc_type: IfcType::IfcWall,
            attributes: vec![
                AttributeValue::String("2O2Fr$t4X7Zf8NOew3FLOH".into()),
                AttributeValue::EntityRef(EntityId(5)),
                AttributeValue::String("Wall 1".into()),
                AttributeValue::Null,
            ],
        }
    }

    #[test]
    fn test_record_names_attributes() {
        let record = ItemRecord::from_entity(&wall(10));
        assert_eq!(record.express_id, EntityId(10));
        assert_eq!(
            record.get("Name"),
            Some(&AttributeValue::String("Wall 1".into()))
        );
        assert_eq!(
            record.get("OwnerHistory"),
            Some(&AttributeValue::EntityRef(EntityId(5)))
        );
        assert!(record.get("Tag").is_none());
    }

    #[test]
    fn test_record_json() {
        let record = ItemRecord::from_entity(&wall(10));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["expressID"], json!(10));
        assert_eq!(value["type"], json!("IfcWall"));
        assert_eq!(value["Name"], json!({"type": 1, "value": "Wall 1"}));
        assert_eq!(value["Description"], json!(null));
    }

    #[test]
    fn test_unknown_kind_gets_positional_names() {
        let entity = DecodedEntity {
            id: EntityId(3),
            ifc_type: IfcType::parse("IFCFLOWTERMINAL"),
            attributes: vec![AttributeValue::Integer(1), AttributeValue::Null],
        };
        let record = ItemRecord::from_entity(&entity);
        assert_eq!(record.get("Attribute0"), Some(&AttributeValue::Integer(1)));
        assert!(record.get("Attribute1").is_some());
    }

    #[test]
    fn test_item_map_keeps_insertion_order() {
        let mut map = ItemMap::new();
        for id in [7, 2, 9] {
            map.insert(ItemRecord::from_entity(&wall(id)));
        }
        let ids: Vec<_> = map.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![7, 2, 9]);

        let text = serde_json::to_string(&map).unwrap();
        let first = text.find("\"7\"").unwrap();
        let last = text.find("\"9\"").unwrap();
        assert!(first < last);
    }
}
