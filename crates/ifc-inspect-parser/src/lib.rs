// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Inspect Parser - STEP/IFC parsing engine
//!
//! This crate parses IFC (STEP) text and serves it through the handle-based
//! [`ModelApi`](ifc_inspect_model::ModelApi) defined in `ifc-inspect-model`.
//!
//! # Features
//!
//! - **Fast tokenization** using `nom` combinators
//! - **SIMD-accelerated scanning** using `memchr`
//! - **Lazy entity decoding** - records are decoded only when requested
//! - **Header metadata** from FILE_DESCRIPTION, FILE_NAME and FILE_SCHEMA
//!
//! # Example
//!
//! ```ignore
//! use ifc_inspect_parser::IfcEngine;
//! use ifc_inspect_model::ModelApi;
//!
//! let mut engine = IfcEngine::new();
//! engine.init()?;
//! let model = engine.open_model(ifc_content)?;
//!
//! for id in engine.get_all_lines(model)?.iter() {
//!     let record = engine.get_line(model, id)?;
//!     println!("{} {}", id, record.ifc_type);
//! }
//! engine.close_model(model);
//! ```

mod engine;
mod header;
mod model;
mod scanner;
mod tokenizer;

pub use engine::IfcEngine;
pub use header::parse_header;
pub use model::ParsedModel;
pub use scanner::{EntityIndex, EntityScanner, ScannedEntity};
pub use tokenizer::{parse_entity, Token};
