//! Contrato de las estrategias.
//!
//! Una estrategia decide cómo el mapa de atributos ya fusionado se convierte
//! en la entidad concreta (identidad, registro persistido, validación
//! tipada...). El core sólo la invoca una vez por build, después de aplicar
//! todas las capas, y propaga su error tal cual.
use std::fmt::Debug;

use async_trait::async_trait;

use crate::constants::DEFAULT_STRATEGY_NAME;
use crate::errors::BoxError;
use crate::model::{Entity, Fields};

#[async_trait]
pub trait Strategy: Send + Sync + Debug {
    /// Nombre para logs e introspección.
    fn name(&self) -> &str {
        DEFAULT_STRATEGY_NAME
    }

    /// Finaliza `attributes` como una entidad de tipo `kind`.
    async fn build(&self, kind: &str, attributes: Fields) -> Result<Entity, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Identity;

    #[async_trait]
    impl Strategy for Identity {
        async fn build(&self, kind: &str, attributes: Fields) -> Result<Entity, BoxError> {
            Ok(Entity::new(kind, attributes))
        }
    }

    #[test]
    fn default_name_and_build() {
        let s: Box<dyn Strategy> = Box::new(Identity);
        assert_eq!(s.name(), DEFAULT_STRATEGY_NAME);
        let attrs = crate::model::fields_from(json!({"title": "x"})).unwrap();
        let e = tokio_test::block_on(s.build("Project", attrs)).unwrap();
        assert_eq!(e.kind, "Project");
        assert_eq!(e["title"], json!("x"));
    }
}
