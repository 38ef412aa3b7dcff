// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine traits
//!
//! [`ModelApi`] is the handle-based read surface of an IFC engine. Item
//! extraction is written against it so it works with the real parser and
//! with any other implementation.

use crate::{EntityId, ItemRecord, ModelId, Result};

/// Ordered item IDs of one model
///
/// Indexed 1..=N like the lines of the data section they came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSet {
    ids: Vec<EntityId>,
}

impl LineSet {
    /// Create a line set from IDs in file order
    pub fn new(ids: Vec<EntityId>) -> Self {
        Self { ids }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the model has no lines
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// ID at a 1-based index; `None` for 0 or past the end
    pub fn get(&self, index: usize) -> Option<EntityId> {
        index
            .checked_sub(1)
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    /// IDs in order
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<EntityId> for LineSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read access to models opened in an engine
pub trait ModelApi {
    /// All item IDs of a model, in file order
    ///
    /// Fails with `ModelNotOpen` for closed or unknown handles.
    fn get_all_lines(&self, model: ModelId) -> Result<LineSet>;

    /// Decode one item into its property record
    fn get_line(&self, model: ModelId, id: EntityId) -> Result<ItemRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_set_is_one_based() {
        let lines: LineSet = [3, 1, 8].into_iter().map(EntityId).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(0), None);
        assert_eq!(lines.get(1), Some(EntityId(3)));
        assert_eq!(lines.get(3), Some(EntityId(8)));
        assert_eq!(lines.get(4), None);
    }
}
