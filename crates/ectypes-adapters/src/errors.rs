//! Errores de las estrategias del crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{kind} with id '{id}' already stored")]
    DuplicateId { kind: String, id: String },
    #[error("attributes do not match {kind}: {source}")]
    InvalidShape {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Rejected(String),
}
