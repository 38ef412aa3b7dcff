// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Inspect Extract - item mappings from IFC text
//!
//! [`get_all_items`] walks an open model through the
//! [`ModelApi`](ifc_inspect_model::ModelApi) trait. [`Ingestion`] wraps the
//! whole path from file text to pretty-printed JSON:
//!
//! ```ignore
//! use ifc_inspect_extract::{IngestConfig, Ingestion};
//!
//! let mut ingestion = Ingestion::new(IngestConfig::default());
//! let report = ingestion.load_file(&text)?;
//! println!("{}", report.json);
//! ```

mod extract;
mod ingest;

pub use extract::{get_all_items, Extraction, ItemError};
pub use ingest::{normalize_line_endings, IngestConfig, IngestReport, Ingestion};
