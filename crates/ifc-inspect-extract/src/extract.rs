// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item extraction
//!
//! Walks every line of an open model and collects the property records into
//! an [`ItemMap`], optionally leaving out geometry entities.

use ifc_inspect_model::{EntityId, ItemMap, ModelApi, ModelId, ParseError, Result};

/// A line whose record could not be fetched
#[derive(Debug)]
pub struct ItemError {
    /// 1-based line index
    pub index: usize,
    /// Item ID at that line
    pub id: EntityId,
    /// Why the fetch failed
    pub error: ParseError,
}

/// Outcome of one extraction pass
#[derive(Debug, Default)]
pub struct Extraction {
    /// Records in line order
    pub items: ItemMap,
    /// Lines that were skipped
    pub errors: Vec<ItemError>,
}

impl Extraction {
    /// Whether every line was read
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Collect the records of every line of `model`
///
/// Lines are visited in order 1..=N. A line that fails to decode is logged,
/// recorded in [`Extraction::errors`] and skipped. With `exclude_geometry`
/// set, records whose type is in the geometry set are left out.
///
/// Fails only when the line set itself cannot be obtained.
pub fn get_all_items<A>(api: &A, model: ModelId, exclude_geometry: bool) -> Result<Extraction>
where
    A: ModelApi + ?Sized,
{
    let lines = api.get_all_lines(model)?;
    let mut extraction = Extraction::default();

    for (offset, id) in lines.iter().enumerate() {
        let index = offset + 1;
        match api.get_line(model, id) {
            Ok(record) => {
                if exclude_geometry && record.is_geometry() {
                    continue;
                }
                extraction.items.insert(record);
            }
            Err(error) => {
                log::warn!("Skipping item {id} at line {index}: {error}");
                extraction.errors.push(ItemError { index, id, error });
            }
        }
    }

    log::debug!(
        "Extracted {} of {} items from model {model} ({} failed)",
        extraction.items.len(),
        lines.len(),
        extraction.errors.len()
    );

    Ok(extraction)
}
