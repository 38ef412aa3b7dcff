// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HEADER section metadata

use crate::scanner::data_section_start;
use crate::tokenizer::{parse_header_record, Token};
use ifc_inspect_model::ModelMetadata;
use memchr::memmem;

/// Read FILE_DESCRIPTION, FILE_NAME and FILE_SCHEMA from the header
///
/// Missing or malformed records leave their fields empty. The schema version
/// defaults to `IFC2X3` when FILE_SCHEMA is absent.
pub fn parse_header(content: &str) -> ModelMetadata {
    let mut metadata = ModelMetadata {
        schema_version: "IFC2X3".to_string(),
        ..Default::default()
    };

    let Some(section) = header_section(content) else {
        return metadata;
    };

    let mut rest = section;
    while let Some((name, args, next)) = parse_header_record(rest) {
        match name.to_ascii_uppercase().as_str() {
            "FILE_DESCRIPTION" => {
                metadata.file_description = string_at(&args, 0);
            }
            "FILE_NAME" => {
                metadata.file_name = string_at(&args, 0);
                metadata.timestamp = string_at(&args, 1);
                metadata.author = string_at(&args, 2);
                metadata.organization = string_at(&args, 3);
                metadata.preprocessor_version = string_at(&args, 4);
                metadata.originating_system = string_at(&args, 5);
            }
            "FILE_SCHEMA" => {
                if let Some(schema) = string_at(&args, 0) {
                    metadata.schema_version = schema;
                }
            }
            other => log::debug!("Ignoring header record {other}"),
        }
        rest = next;
    }

    metadata
}

/// Text after `HEADER;` up to the DATA statement
///
/// Record parsing stops at the closing `ENDSEC;`.
fn header_section(content: &str) -> Option<&str> {
    let start = memmem::find(content.as_bytes(), b"HEADER;")? + 7;
    let end = data_section_start(content)
        .unwrap_or(content.len())
        .max(start);
    content.get(start..end)
}

fn string_at(args: &[Token<'_>], index: usize) -> Option<String> {
    args.get(index)
        .and_then(|token| token.first_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Jane Doe'),('ACME'),'Preprocessor 1.0','Modeller 7','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_parse_header_fields() {
        let metadata = parse_header(HEADER);
        assert_eq!(metadata.schema_version, "IFC4");
        assert_eq!(
            metadata.file_description.as_deref(),
            Some("ViewDefinition [CoordinationView]")
        );
        assert_eq!(metadata.file_name.as_deref(), Some("test.ifc"));
        assert_eq!(metadata.timestamp.as_deref(), Some("2024-01-01T00:00:00"));
        assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
        assert_eq!(metadata.organization.as_deref(), Some("ACME"));
        assert_eq!(metadata.preprocessor_version.as_deref(), Some("Preprocessor 1.0"));
        assert_eq!(metadata.originating_system.as_deref(), Some("Modeller 7"));
    }

    #[test]
    fn test_missing_header_uses_defaults() {
        let metadata = parse_header("DATA;\n#1=IFCWALL($);\nENDSEC;");
        assert_eq!(metadata.schema_version, "IFC2X3");
        assert!(metadata.file_name.is_none());
    }

    #[test]
    fn test_section_keywords_inside_strings() {
        let metadata = parse_header(
            "HEADER;\nFILE_DESCRIPTION(('export DATA; view, ENDSEC;'),'2;1');\n\
             FILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n#1=IFCWALL($);\nENDSEC;",
        );
        assert_eq!(
            metadata.file_description.as_deref(),
            Some("export DATA; view, ENDSEC;")
        );
        assert_eq!(metadata.schema_version, "IFC4");
    }

    #[test]
    fn test_empty_strings_are_none() {
        let metadata = parse_header("HEADER;\nFILE_NAME('','',(''),(''),'','','');\nENDSEC;");
        assert!(metadata.file_name.is_none());
        assert!(metadata.author.is_none());
    }
}
