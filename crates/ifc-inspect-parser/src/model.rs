// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ParsedModel - one opened IFC file

use crate::header::parse_header;
use crate::scanner::{data_section_start, EntityIndex};
use crate::tokenizer::parse_entity_at;

use ifc_inspect_model::{DecodedEntity, EntityId, LineSet, ModelMetadata, ParseError, Result};

/// Indexed IFC content with lazy entity decoding
///
/// Parsing only locates records; attributes are decoded on request.
#[derive(Debug)]
pub struct ParsedModel {
    content: String,
    index: EntityIndex,
    metadata: ModelMetadata,
}

impl ParsedModel {
    /// Index IFC content
    ///
    /// Fails with `InvalidFormat` when the text has no DATA section or the
    /// section holds no entity records.
    pub fn parse(content: String) -> Result<Self> {
        if data_section_start(&content).is_none() {
            return Err(ParseError::format("No DATA section found"));
        }

        let index = EntityIndex::build(&content);
        if index.is_empty() {
            return Err(ParseError::format("DATA section contains no entities"));
        }
        let metadata = parse_header(&content);
        log::debug!(
            "Indexed {} entities ({} schema)",
            index.len(),
            metadata.schema_version
        );

        Ok(Self {
            content,
            index,
            metadata,
        })
    }

    /// Item IDs in file order
    pub fn lines(&self) -> LineSet {
        self.index.lines()
    }

    /// Number of indexed entities
    pub fn entity_count(&self) -> usize {
        self.index.len()
    }

    /// Decode one entity
    pub fn decode(&self, id: EntityId) -> Result<DecodedEntity> {
        let (start, end) = self
            .index
            .range(id)
            .ok_or(ParseError::EntityNotFound(id))?;
        parse_entity_at(&self.content, start, end).map_err(|msg| ParseError::entity_parse(id, msg))
    }

    /// Header metadata
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_inspect_model::{AttributeValue, IfcType};

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'Test Project',$,$,$,$,$,$);
#2=IFCBUILDINGSTOREY('storey',$,'Level 1',$,$,$,$,$,.ELEMENT.,0.);
#3=IFCWALL('wall',$,'Wall 1',$,$,$,$,$);
#4=IFCWALL('broken',$,;
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_parse_model() {
        let model = ParsedModel::parse(TEST_IFC.to_string()).unwrap();
        assert_eq!(model.entity_count(), 4);
        assert_eq!(model.metadata().schema_version, "IFC2X3");

        let storey = model.decode(EntityId(2)).unwrap();
        assert_eq!(storey.ifc_type, IfcType::IfcBuildingStorey);
        assert_eq!(storey.get_string(2), Some("Level 1"));
        assert_eq!(storey.get(8), Some(&AttributeValue::Enum("ELEMENT".into())));
    }

    #[test]
    fn test_decode_errors() {
        let model = ParsedModel::parse(TEST_IFC.to_string()).unwrap();
        assert!(matches!(
            model.decode(EntityId(4)),
            Err(ParseError::EntityParse(EntityId(4), _))
        ));
        assert!(matches!(
            model.decode(EntityId(42)),
            Err(ParseError::EntityNotFound(EntityId(42)))
        ));
    }

    #[test]
    fn test_data_keyword_in_header_string() {
        let content = TEST_IFC.replace(
            "'ViewDefinition [CoordinationView]'",
            "'export DATA; view'",
        );
        let model = ParsedModel::parse(content).unwrap();
        assert_eq!(model.entity_count(), 4);
        assert_eq!(
            model.metadata().file_description.as_deref(),
            Some("export DATA; view")
        );
    }

    #[test]
    fn test_rejects_text_without_data() {
        let result = ParsedModel::parse("not an ifc file".to_string());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let empty = ParsedModel::parse("HEADER;\nENDSEC;\nDATA;\nENDSEC;\n".to_string());
        assert!(matches!(empty, Err(ParseError::InvalidFormat(_))));
    }
}
