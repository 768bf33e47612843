//! Context: registro de producers por nombre de entidad.
//!
//! Guarda la estrategia por defecto y los producers compilados. Se muta sólo
//! durante el setup de los tests (`load`/`add`); los builds toman `&self`.
use std::sync::Arc;

use indexmap::IndexMap;
use log::{info, warn};

use super::producer::Producer;
use crate::blueprint::Blueprint;
use crate::errors::EctypesError;
use crate::model::{Entity, Fields};
use crate::strategy::Strategy;

#[derive(Debug, Default)]
pub struct Context {
    strategy: Option<Arc<dyn Strategy>>,
    producers: IndexMap<String, Producer>,
}

/// Crea un contexto vacío, sin estrategia ni producers.
pub fn create_context() -> Context {
    Context::new()
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fija la estrategia por defecto, reemplazando la anterior. No afecta a
    /// producers ya compilados.
    pub fn load<S: Strategy + 'static>(&mut self, strategy: S) -> &mut Self {
        self.load_shared(Arc::new(strategy))
    }

    /// Igual que `load` pero con una estrategia compartida, útil cuando el
    /// test necesita inspeccionarla después.
    pub fn load_shared(&mut self, strategy: Arc<dyn Strategy>) -> &mut Self {
        info!("default strategy set to '{}'", strategy.name());
        self.strategy = Some(strategy);
        self
    }

    pub fn strategy(&self) -> Option<&Arc<dyn Strategy>> {
        self.strategy.as_ref()
    }

    /// Compila y registra uno o varios blueprints.
    ///
    /// La estrategia de cada blueprint se resuelve antes de registrar nada:
    /// si alguno no tiene estrategia (propia ni por defecto) se devuelve
    /// `MissingStrategy` y el contexto queda intacto. Un nombre ya registrado
    /// se sobreescribe.
    pub fn add<I>(&mut self, blueprints: I) -> Result<&mut Self, EctypesError>
        where I: IntoIterator<Item = Blueprint>
    {
        let mut resolved = Vec::new();
        for blueprint in blueprints {
            let strategy = match (&blueprint.strategy, &self.strategy) {
                (Some(own), _) => own.clone(),
                (None, Some(default)) => default.clone(),
                (None, None) => {
                    warn!("blueprint '{}' has no strategy and the context has no default", blueprint.name());
                    return Err(EctypesError::MissingStrategy { entity: blueprint.name().to_string() });
                }
            };
            resolved.push((blueprint, strategy));
        }

        for (blueprint, strategy) in resolved {
            let producer = Producer::compile(blueprint, strategy);
            info!("registered producer '{}' ({} fields, {} befores, strategy '{}')",
                  producer.name(),
                  producer.field_names().count(),
                  producer.before_count(),
                  producer.strategy_name());
            self.producers.insert(producer.name().to_string(), producer);
        }
        Ok(self)
    }

    /// Producer registrado bajo `name` (sensible a mayúsculas).
    pub fn producer_for(&self, name: &str) -> Option<&Producer> {
        self.producers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.producers.contains_key(name)
    }

    /// Nombres registrados en orden de registro.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.producers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Busca el producer y construye. Un nombre desconocido se reporta como
    /// `UnknownEntity` en el resultado.
    pub async fn build(&self, name: &str, overrides: Option<Fields>) -> Result<Entity, EctypesError> {
        let producer = self.producer_for(name)
                           .ok_or_else(|| EctypesError::UnknownEntity(name.to_string()))?;
        match overrides {
            Some(overrides) => producer.build_with(overrides).await,
            None => producer.build().await,
        }
    }
}
