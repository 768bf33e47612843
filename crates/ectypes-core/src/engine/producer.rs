//! Producer: blueprint compilado con su estrategia ya resuelta.
//!
//! Compilar es una transformación pura: no se invoca ningún generador ni
//! before. El producer es inmutable y barato de clonar (todo va en `Arc`),
//! y cada build arranca con un estado acumulado vacío.
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use super::pipeline::BuildPipeline;
use crate::blueprint::{Before, Blueprint, Generator};
use crate::errors::EctypesError;
use crate::model::{Entity, Fields};
use crate::strategy::Strategy;

#[derive(Clone)]
pub struct Producer {
    name: Arc<str>,
    fields: Arc<IndexMap<String, Arc<dyn Generator>>>,
    befores: Arc<[Before]>,
    strategy: Arc<dyn Strategy>,
}

impl Producer {
    /// Compila `blueprint` con la estrategia efectiva ya resuelta. La propia
    /// del blueprint, si existe, tiene prioridad sobre `strategy`.
    pub fn compile(blueprint: Blueprint, strategy: Arc<dyn Strategy>) -> Self {
        let Blueprint { name,
                        fields,
                        befores,
                        strategy: own } = blueprint;
        Self { name: Arc::from(name),
               fields: Arc::new(fields),
               befores: Arc::from(befores),
               strategy: own.unwrap_or(strategy) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn before_count(&self) -> usize {
        self.befores.len()
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Construye una entidad sin overrides.
    pub async fn build(&self) -> Result<Entity, EctypesError> {
        self.run(None).await
    }

    /// Construye una entidad; `overrides` gana sobre befores y fields y puede
    /// introducir claves que el blueprint no declara.
    pub async fn build_with(&self, overrides: Fields) -> Result<Entity, EctypesError> {
        self.run(Some(overrides)).await
    }

    /// Construye `count` entidades una tras otra, cada una con su propio
    /// estado. Devuelve el primer error.
    pub async fn build_list(&self, count: usize, overrides: Option<Fields>) -> Result<Vec<Entity>, EctypesError> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.run(overrides.clone()).await?);
        }
        Ok(out)
    }

    async fn run(&self, overrides: Option<Fields>) -> Result<Entity, EctypesError> {
        debug!("{}: build requested (overrides: {})",
               self.name,
               overrides.as_ref().map_or(0, Fields::len));
        BuildPipeline { entity: &self.name,
                        fields: &self.fields,
                        befores: &self.befores,
                        strategy: self.strategy.as_ref() }.run(overrides)
                                                          .await
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
         .field("name", &self.name)
         .field("fields", &self.fields.keys().collect::<Vec<_>>())
         .field("befores", &self.befores.len())
         .field("strategy", &self.strategy.name())
         .finish()
    }
}
