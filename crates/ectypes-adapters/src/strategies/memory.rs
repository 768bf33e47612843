use async_trait::async_trait;
use ectypes_core::{BoxError, Entity, Fields, Strategy};

/// Estrategia identidad: el mapa fusionado es la entidad.
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryStrategy;

impl InMemoryStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Strategy for InMemoryStrategy {
    fn name(&self) -> &str {
        "memory"
    }

    async fn build(&self, kind: &str, attributes: Fields) -> Result<Entity, BoxError> {
        Ok(Entity::new(kind, attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_attributes_unchanged() {
        let attrs = ectypes_core::fields_from(json!({"title": "t", "n": 1})).unwrap();
        let e = InMemoryStrategy::new().build("Project", attrs.clone()).await.unwrap();
        assert_eq!(e.kind, "Project");
        assert_eq!(e.attributes, attrs);
    }
}
