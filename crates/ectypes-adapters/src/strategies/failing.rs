use async_trait::async_trait;
use ectypes_core::{BoxError, Entity, Fields, Strategy};
use log::debug;

use crate::errors::AdapterError;

/// Estrategia que siempre rechaza la entidad con el mensaje dado.
#[derive(Debug, Clone)]
pub struct FailingStrategy {
    message: String,
}

impl FailingStrategy {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[async_trait]
impl Strategy for FailingStrategy {
    fn name(&self) -> &str {
        "failing"
    }

    async fn build(&self, kind: &str, _attributes: Fields) -> Result<Entity, BoxError> {
        debug!("rejecting {kind}: {}", self.message);
        Err(Box::new(AdapterError::Rejected(self.message.clone())))
    }
}
