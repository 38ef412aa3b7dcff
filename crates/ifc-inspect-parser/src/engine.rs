// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Handle-based IFC engine

use crate::model::ParsedModel;

use ifc_inspect_model::{
    EntityId, ItemRecord, LineSet, ModelApi, ModelId, ModelMetadata, ParseError, Result,
};
use rustc_hash::FxHashMap;

/// Engine holding any number of open models behind numeric handles
///
/// Handles start at 0 and are never reused within one engine, so a handle
/// from a closed model keeps failing with `ModelNotOpen`.
#[derive(Debug, Default)]
pub struct IfcEngine {
    initialized: bool,
    next_model: u32,
    models: FxHashMap<ModelId, ParsedModel>,
}

impl IfcEngine {
    /// Create an uninitialized engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the engine for use; calling it again is a no-op
    pub fn init(&mut self) -> Result<()> {
        if !self.initialized {
            self.initialized = true;
            log::info!("IFC engine initialized");
        }
        Ok(())
    }

    /// Whether `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Parse `data` and register it as a new model
    pub fn open_model(&mut self, data: &str) -> Result<ModelId> {
        if !self.initialized {
            return Err(ParseError::NotInitialized);
        }

        let model = ParsedModel::parse(data.to_string())?;
        let id = ModelId(self.next_model);
        self.next_model = self
            .next_model
            .checked_add(1)
            .ok_or_else(|| ParseError::other("Model handles exhausted"))?;

        log::debug!("Opened model {id} with {} entities", model.entity_count());
        self.models.insert(id, model);
        Ok(id)
    }

    /// Release a model; returns whether the handle was open
    pub fn close_model(&mut self, model: ModelId) -> bool {
        let closed = self.models.remove(&model).is_some();
        if closed {
            log::debug!("Closed model {model}");
        }
        closed
    }

    /// Whether a handle refers to an open model
    pub fn is_model_open(&self, model: ModelId) -> bool {
        self.models.contains_key(&model)
    }

    /// Number of open models
    pub fn open_model_count(&self) -> usize {
        self.models.len()
    }

    /// Header metadata of an open model
    pub fn metadata(&self, model: ModelId) -> Result<&ModelMetadata> {
        self.model(model).map(ParsedModel::metadata)
    }

    fn model(&self, model: ModelId) -> Result<&ParsedModel> {
        self.models
            .get(&model)
            .ok_or(ParseError::ModelNotOpen(model))
    }
}

impl ModelApi for IfcEngine {
    fn get_all_lines(&self, model: ModelId) -> Result<LineSet> {
        Ok(self.model(model)?.lines())
    }

    fn get_line(&self, model: ModelId, id: EntityId) -> Result<ItemRecord> {
        let entity = self.model(model)?.decode(id)?;
        Ok(ItemRecord::from_entity(&entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_inspect_model::{AttributeValue, IfcType};

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION((''),'2;1');
FILE_NAME('walls.ifc','',(''),(''),'','','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCWALL('wall-a',$,'Wall A',$,$,$,$,$,$);
#2=IFCCARTESIANPOINT((0.,0.,0.));
#3=IFCWALL('wall-b',$,'Wall B',$,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;
"#;

    fn engine() -> IfcEngine {
        let mut engine = IfcEngine::new();
        engine.init().unwrap();
        engine
    }

    #[test]
    fn test_open_requires_init() {
        let mut engine = IfcEngine::new();
        assert!(matches!(
            engine.open_model(TEST_IFC),
            Err(ParseError::NotInitialized)
        ));
        engine.init().unwrap();
        engine.init().unwrap();
        assert!(engine.is_initialized());
        assert!(engine.open_model(TEST_IFC).is_ok());
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut engine = engine();
        let first = engine.open_model(TEST_IFC).unwrap();
        assert_eq!(first, ModelId(0));
        assert!(engine.close_model(first));
        assert!(!engine.close_model(first));

        let second = engine.open_model(TEST_IFC).unwrap();
        assert_eq!(second, ModelId(1));
        assert!(matches!(
            engine.get_all_lines(first),
            Err(ParseError::ModelNotOpen(ModelId(0)))
        ));
        assert_eq!(engine.open_model_count(), 1);
    }

    #[test]
    fn test_get_all_lines_and_get_line() {
        let mut engine = engine();
        let model = engine.open_model(TEST_IFC).unwrap();

        let lines = engine.get_all_lines(model).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(2), Some(EntityId(2)));

        let record = engine.get_line(model, EntityId(3)).unwrap();
        assert_eq!(record.ifc_type, IfcType::IfcWall);
        assert_eq!(record.get("Name"), Some(&AttributeValue::String("Wall B".into())));

        let point = engine.get_line(model, EntityId(2)).unwrap();
        assert!(point.is_geometry());

        assert_eq!(engine.metadata(model).unwrap().file_name.as_deref(), Some("walls.ifc"));
    }

    #[test]
    fn test_invalid_data_does_not_consume_a_handle() {
        let mut engine = engine();
        assert!(engine.open_model("garbage").is_err());
        assert_eq!(engine.open_model(TEST_IFC).unwrap(), ModelId(0));
    }
}
