// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model ingestion: text in, item mapping and JSON out

use crate::extract::{get_all_items, ItemError};

use ifc_inspect_model::{ItemMap, ModelId, ModelMetadata, ParseError, Result};
use ifc_inspect_parser::IfcEngine;
use std::borrow::Cow;

/// Ingestion settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IngestConfig {
    /// Leave geometry entities out of the result mapping
    pub exclude_geometry: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            exclude_geometry: true,
        }
    }
}

/// Everything produced by one `load_file` call
#[derive(Debug)]
pub struct IngestReport {
    /// Handle the model had while it was open; already closed
    pub model: ModelId,
    /// Header metadata
    pub metadata: ModelMetadata,
    /// Extracted records in line order
    pub items: ItemMap,
    /// Pretty-printed JSON of `items`
    pub json: String,
    /// Lines that could not be read
    pub errors: Vec<ItemError>,
}

/// Owns the parsing engine and turns file text into item mappings
#[derive(Debug, Default)]
pub struct Ingestion {
    engine: IfcEngine,
    config: IngestConfig,
}

impl Ingestion {
    /// Create an ingestion context with its own engine
    pub fn new(config: IngestConfig) -> Self {
        Self {
            engine: IfcEngine::new(),
            config,
        }
    }

    /// Current settings
    pub fn config(&self) -> IngestConfig {
        self.config
    }

    /// The underlying engine
    pub fn engine(&self) -> &IfcEngine {
        &self.engine
    }

    /// Initialize the engine if needed and open `text` as a new model
    pub fn open_model(&mut self, text: &str) -> Result<ModelId> {
        self.engine.init()?;
        self.engine.open_model(text)
    }

    /// Parse file text, extract its items and close the model again
    ///
    /// Line endings are normalized before parsing. Once the model is open
    /// it is closed whether or not extraction succeeds.
    pub fn load_file(&mut self, file_contents: &str) -> Result<IngestReport> {
        let text = normalize_line_endings(file_contents);
        let model = self.open_model(&text)?;

        let report = self.extract(model);
        self.engine.close_model(model);
        report
    }

    fn extract(&self, model: ModelId) -> Result<IngestReport> {
        let metadata = self.engine.metadata(model)?.clone();
        let extraction = get_all_items(&self.engine, model, self.config.exclude_geometry)?;
        let json = serde_json::to_string_pretty(&extraction.items)
            .map_err(|e| ParseError::Serialize(e.to_string()))?;

        log::info!(
            "Loaded {} ({}): {} items, {} skipped",
            metadata.file_name.as_deref().unwrap_or("unnamed model"),
            metadata.schema_version,
            extraction.items.len(),
            extraction.errors.len()
        );

        Ok(IngestReport {
            model,
            metadata,
            items: extraction.items,
            json,
            errors: extraction.errors,
        })
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL_IFC: &str = "ISO-10303-21;\nHEADER;\nFILE_NAME('wall.ifc','',(''),(''),'','','');\nFILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n#1=IFCWALL('w',$,'Wall',$,$,$,$,$,$);\n#2=IFCCARTESIANPOINT((1.,2.,3.));\nENDSEC;\nEND-ISO-10303-21;\n";

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_load_file_closes_model() {
        let mut ingestion = Ingestion::default();
        let report = ingestion.load_file(WALL_IFC).unwrap();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.metadata.file_name.as_deref(), Some("wall.ifc"));
        assert!(report.json.contains("\"IfcWall\""));
        assert!(!ingestion.engine().is_model_open(report.model));
        assert_eq!(ingestion.engine().open_model_count(), 0);
    }

    #[test]
    fn test_geometry_filter_follows_config() {
        let mut ingestion = Ingestion::new(IngestConfig {
            exclude_geometry: false,
        });
        let report = ingestion.load_file(WALL_IFC).unwrap();
        assert_eq!(report.items.len(), 2);
    }

    #[test]
    fn test_rejected_input_propagates() {
        let mut ingestion = Ingestion::default();
        assert!(matches!(
            ingestion.load_file("hello"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(ingestion.engine().open_model_count(), 0);
    }

    #[test]
    fn test_each_load_gets_a_new_handle() {
        let mut ingestion = Ingestion::default();
        let first = ingestion.load_file(WALL_IFC).unwrap();
        let second = ingestion.load_file(WALL_IFC).unwrap();
        assert_ne!(first.model, second.model);
        assert_eq!(first.json, second.json);
    }
}
