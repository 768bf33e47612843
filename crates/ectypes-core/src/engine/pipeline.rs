//! Pipeline de build.
//!
//! Ejecuta los befores estrictamente en orden, cada uno después de que el
//! anterior haya completado, acumulando sus resultados parciales. Luego
//! aplica los fields y los overrides y delega la finalización en la
//! estrategia. El estado acumulado es local a cada llamada.

use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::blueprint::{Before, Generator};
use crate::errors::EctypesError;
use crate::injection::{apply_layer, Layer};
use crate::model::{fields_from, Entity, Fields};
use crate::strategy::Strategy;

/// Vista prestada de un producer compilado durante un build.
pub(crate) struct BuildPipeline<'a> {
    pub entity: &'a str,
    pub fields: &'a IndexMap<String, Arc<dyn Generator>>,
    pub befores: &'a [Before],
    pub strategy: &'a dyn Strategy,
}

impl BuildPipeline<'_> {
    pub async fn run(&self, overrides: Option<Fields>) -> Result<Entity, EctypesError> {
        let state = self.run_befores().await?;
        let state = self.layer_values(state, overrides);
        self.finalize(state).await
    }

    async fn run_befores(&self) -> Result<Fields, EctypesError> {
        let mut state = Fields::new();
        for (index, before) in self.befores.iter().enumerate() {
            debug!("{}: running before #{index} ({before:?})", self.entity);
            let partial = before.run(&state).await.map_err(|source| {
                                                       warn!("{}: before #{index} failed: {source}", self.entity);
                                                       EctypesError::StepFailed { entity: self.entity.to_string(),
                                                                                  index,
                                                                                  source }
                                                   })?;
            let partial = fields_from(partial).ok_or_else(|| {
                                                  warn!("{}: before #{index} returned a non-object value", self.entity);
                                                  EctypesError::InvalidPartial { entity: self.entity.to_string(),
                                                                                 index }
                                              })?;
            apply_layer(self.entity, &mut state, Layer::Before(index), partial);
        }
        Ok(state)
    }

    fn layer_values(&self, mut state: Fields, overrides: Option<Fields>) -> Fields {
        let generated: Fields = self.fields
                                    .iter()
                                    .map(|(name, generator)| (name.clone(), generator.generate()))
                                    .collect();
        apply_layer(self.entity, &mut state, Layer::Fields, generated);
        if let Some(overrides) = overrides {
            apply_layer(self.entity, &mut state, Layer::Overrides, overrides);
        }
        state
    }

    async fn finalize(&self, state: Fields) -> Result<Entity, EctypesError> {
        debug!("{}: finalizing {} attributes with strategy '{}'",
               self.entity,
               state.len(),
               self.strategy.name());
        self.strategy.build(self.entity, state).await.map_err(|source| {
                                                          warn!("{}: strategy '{}' failed: {source}",
                                                                self.entity,
                                                                self.strategy.name());
                                                          EctypesError::StrategyFailed { entity: self.entity.to_string(),
                                                                                         source }
                                                      })
    }
}
