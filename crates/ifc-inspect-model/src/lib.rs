// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Inspect Model - Schema, record types and engine traits
//!
//! This crate holds the types shared between the parsing engine and the
//! item extraction routine:
//!
//! - [`IfcType`] - tagged entity kinds generated from one schema table,
//!   each carrying its class name, STEP keyword and attribute names
//! - [`AttributeValue`] / [`DecodedEntity`] - decoded STEP data
//! - [`ItemRecord`] / [`ItemMap`] - the property records handed to callers
//! - [`ModelApi`] - the handle-based engine surface extraction is written
//!   against
//!
//! # Example
//!
//! ```ignore
//! use ifc_inspect_model::{ModelApi, ModelId};
//!
//! let lines = api.get_all_lines(model)?;
//! for id in lines.iter() {
//!     let record = api.get_line(model, id)?;
//!     println!("{} {}", id, record.ifc_type);
//! }
//! ```

pub mod error;
pub mod item;
pub mod schema;
pub mod traits;
pub mod types;

pub use error::*;
pub use item::*;
pub use schema::*;
pub use traits::*;
pub use types::*;
