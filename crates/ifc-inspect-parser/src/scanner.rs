// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast entity scanner
//!
//! Walks the DATA section record by record to find entity boundaries
//! without decoding attributes.

use ifc_inspect_model::{EntityId, LineSet};
use memchr::{memchr2, memmem};
use rustc_hash::FxHashMap;

/// One record found by the scanner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedEntity<'a> {
    /// Entity ID
    pub id: u32,
    /// Keyword as written; empty for complex instances `#1=(...)`
    pub type_name: &'a str,
    /// Byte offset of the leading `#`
    pub start: usize,
    /// Byte offset just past the terminating `;`
    pub end: usize,
}

/// Record scanner over the DATA section
pub struct EntityScanner<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> EntityScanner<'a> {
    /// Create a new scanner positioned after `DATA;`
    ///
    /// Content without a DATA section is scanned from the start.
    pub fn new(content: &'a str) -> Self {
        let pos = data_section_start(content).unwrap_or(0);
        Self { content, pos }
    }

    /// Scan to the next entity record
    pub fn next_entity(&mut self) -> Option<ScannedEntity<'a>> {
        loop {
            self.skip_trivia();
            let bytes = self.content.as_bytes();
            if self.pos >= bytes.len() {
                return None;
            }

            if bytes[self.pos] != b'#' {
                if self.content[self.pos..].starts_with("ENDSEC") {
                    self.pos = bytes.len();
                    return None;
                }
                // Not an entity record; skip the statement
                self.find_record_end()?;
                continue;
            }

            let start = self.pos;
            match self.read_id_and_keyword() {
                Some((id, type_name)) => {
                    let end = self.find_record_end()?;
                    return Some(ScannedEntity {
                        id,
                        type_name,
                        start,
                        end,
                    });
                }
                None => {
                    self.find_record_end()?;
                }
            }
        }
    }

    /// Skip whitespace and `/* */` comments
    fn skip_trivia(&mut self) {
        let bytes = self.content.as_bytes();
        loop {
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if bytes[self.pos..].starts_with(b"/*") {
                self.pos = match memmem::find(&bytes[self.pos + 2..], b"*/") {
                    Some(offset) => self.pos + 2 + offset + 2,
                    None => bytes.len(),
                };
                continue;
            }
            return;
        }
    }

    /// Read `#id =` and the keyword that follows
    fn read_id_and_keyword(&mut self) -> Option<(u32, &'a str)> {
        let bytes = self.content.as_bytes();

        self.pos += 1; // Skip #
        let id_start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        let id: u32 = self.content[id_start..self.pos].parse().ok()?;

        self.skip_inline_space();
        if bytes.get(self.pos) != Some(&b'=') {
            return None;
        }
        self.pos += 1;
        self.skip_inline_space();

        let type_start = self.pos;
        while self.pos < bytes.len()
            && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_')
        {
            self.pos += 1;
        }

        Some((id, &self.content[type_start..self.pos]))
    }

    fn skip_inline_space(&mut self) {
        let bytes = self.content.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Advance past the next `;` outside of a quoted string
    fn find_record_end(&mut self) -> Option<usize> {
        let bytes = self.content.as_bytes();
        let mut in_string = false;

        while self.pos < bytes.len() {
            if in_string {
                let offset = memchr::memchr(b'\'', &bytes[self.pos..])?;
                self.pos += offset;
                // '' is an escaped quote inside the string
                if bytes.get(self.pos + 1) == Some(&b'\'') {
                    self.pos += 2;
                    continue;
                }
                in_string = false;
                self.pos += 1;
                continue;
            }

            let offset = memchr2(b'\'', b';', &bytes[self.pos..])?;
            self.pos += offset;
            if bytes[self.pos] == b';' {
                self.pos += 1;
                return Some(self.pos);
            }
            in_string = true;
            self.pos += 1;
        }

        None
    }
}

/// Byte offset just past the `DATA;` statement
///
/// Only statement keywords are matched; `DATA;` inside a quoted header
/// string or a comment is skipped.
pub fn data_section_start(content: &str) -> Option<usize> {
    let mut scanner = EntityScanner { content, pos: 0 };
    loop {
        scanner.skip_trivia();
        let rest = &content.as_bytes()[scanner.pos..];
        if rest.is_empty() {
            return None;
        }
        if let Some(after) = rest.strip_prefix(b"DATA") {
            let space = after.iter().take_while(|b| b.is_ascii_whitespace()).count();
            if after.get(space) == Some(&b';') {
                return Some(scanner.pos + 4 + space + 1);
            }
        }
        scanner.find_record_end()?;
    }
}

/// Entity index: byte ranges by ID plus the IDs in file order
#[derive(Clone, Debug, Default)]
pub struct EntityIndex {
    offsets: FxHashMap<u32, (usize, usize)>,
    order: Vec<EntityId>,
}

impl EntityIndex {
    /// Scan content and index every entity record
    ///
    /// A repeated `#id` keeps its first position in the order and points to
    /// the last definition.
    pub fn build(content: &str) -> Self {
        let mut scanner = EntityScanner::new(content);
        let mut index = Self::default();

        while let Some(entity) = scanner.next_entity() {
            let range = (entity.start, entity.end);
            if index.offsets.insert(entity.id, range).is_some() {
                log::warn!("Duplicate definition of #{}, keeping the last one", entity.id);
            } else {
                index.order.push(EntityId(entity.id));
            }
        }

        index
    }

    /// Byte range of an entity
    pub fn range(&self, id: EntityId) -> Option<(usize, usize)> {
        self.offsets.get(&id.0).copied()
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// IDs in file order
    pub fn lines(&self) -> LineSet {
        LineSet::new(self.order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('guid',$,'Project; with semicolon',$,$,$,$,$,#2);
/* a comment #99=IFCWALL(); */
#2=IFCUNITASSIGNMENT((#3));
#3 = IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#4=IFCWALL('it''s',$,'Wall 1',$,$,#5,#6,$);
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_scanner_finds_entities() {
        let mut scanner = EntityScanner::new(TEST_IFC);
        let mut entities = Vec::new();

        while let Some(entity) = scanner.next_entity() {
            entities.push((entity.id, entity.type_name.to_string()));
        }

        assert_eq!(
            entities,
            vec![
                (1, "IFCPROJECT".to_string()),
                (2, "IFCUNITASSIGNMENT".to_string()),
                (3, "IFCSIUNIT".to_string()),
                (4, "IFCWALL".to_string()),
            ]
        );
    }

    #[test]
    fn test_record_ranges_cover_whole_record() {
        let mut scanner = EntityScanner::new(TEST_IFC);
        let first = scanner.next_entity().unwrap();
        let text = &TEST_IFC[first.start..first.end];
        assert!(text.starts_with("#1=IFCPROJECT"));
        assert!(text.ends_with("#2);"));
    }

    #[test]
    fn test_build_index_keeps_file_order() {
        let index = EntityIndex::build(TEST_IFC);
        assert_eq!(index.len(), 4);
        let ids: Vec<u32> = index.lines().iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(index.range(EntityId(4)).is_some());
        assert!(index.range(EntityId(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_indexed_once() {
        let content = "DATA;\n#1=IFCWALL($);\n#2=IFCSLAB($);\n#1=IFCBEAM($);\nENDSEC;";
        let index = EntityIndex::build(content);
        assert_eq!(index.len(), 2);
        let (start, end) = index.range(EntityId(1)).unwrap();
        assert!(content[start..end].contains("IFCBEAM"));
    }

    #[test]
    fn test_data_keyword_inside_header_string() {
        let content = "ISO-10303-21;\nHEADER;\n\
            FILE_DESCRIPTION(('export DATA; view'),'2;1');\n\
            /* DATA; */\n\
            FILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n#7=IFCWALL($);\nENDSEC;\n";
        let start = data_section_start(content).unwrap();
        assert!(content[start..].starts_with("\n#7="));

        let mut scanner = EntityScanner::new(content);
        assert_eq!(scanner.next_entity().unwrap().id, 7);
        assert!(scanner.next_entity().is_none());
    }

    #[test]
    fn test_missing_data_statement() {
        assert_eq!(data_section_start("HEADER;\nFILE_NAME('DATA;');\nENDSEC;\n"), None);
        assert_eq!(data_section_start("DATA ;\n#1=IFCWALL($);"), Some(6));
    }

    #[test]
    fn test_complex_instance_is_still_a_line() {
        let content = "DATA;\n#1=(IFCA()IFCB());\n#2=IFCWALL($);\nENDSEC;";
        let mut scanner = EntityScanner::new(content);
        let first = scanner.next_entity().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.type_name, "");
        assert_eq!(scanner.next_entity().unwrap().id, 2);
    }
}
