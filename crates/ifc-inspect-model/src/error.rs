// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for IFC engine operations

use crate::{EntityId, ModelId};
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while opening or reading an IFC model
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid IFC file format
    #[error("Invalid IFC format: {0}")]
    InvalidFormat(String),

    /// Failed to parse entity
    #[error("Failed to parse entity {0}: {1}")]
    EntityParse(EntityId, String),

    /// Entity not found
    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    /// Model handle was never opened or has been closed
    #[error("Model {0} is not open")]
    ModelNotOpen(ModelId),

    /// Engine used before `init`
    #[error("IFC engine is not initialized")]
    NotInitialized,

    /// Serializing extracted items failed
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        ParseError::InvalidFormat(msg.into())
    }

    /// Create a new entity parse error
    pub fn entity_parse(id: EntityId, msg: impl Into<String>) -> Self {
        ParseError::EntityParse(id, msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ParseError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::EntityNotFound(EntityId(7)).to_string(),
            "Entity #7 not found"
        );
        assert_eq!(
            ParseError::ModelNotOpen(ModelId(3)).to_string(),
            "Model 3 is not open"
        );
        assert_eq!(
            ParseError::entity_parse(EntityId(2), "bad token").to_string(),
            "Failed to parse entity #2: bad token"
        );
    }
}
