//! Blueprints: descripción declarativa de cómo fabricar un tipo de entidad.
//!
//! Un `Blueprint` agrupa generadores de campos, una cadena ordenada de
//! befores y, opcionalmente, una estrategia propia que tiene prioridad
//! sobre la del contexto. Construirlo no ejecuta nada: los generadores y
//! befores sólo corren dentro de un build.

pub mod before;
pub mod generator;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::strategy::Strategy;

pub use before::{done, fail, Before, ChainedStep, StandaloneStep, StepOutput};
pub use generator::Generator;

pub struct Blueprint {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, Arc<dyn Generator>>,
    pub(crate) befores: Vec<Before>,
    pub(crate) strategy: Option<Arc<dyn Strategy>>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               fields: IndexMap::new(),
               befores: Vec::new(),
               strategy: None }
    }

    /// Declara (o reemplaza) el generador de un campo.
    pub fn field<G: Generator + 'static>(mut self, name: impl Into<String>, generator: G) -> Self {
        self.fields.insert(name.into(), Arc::new(generator));
        self
    }

    /// Añade un before al final de la cadena.
    pub fn before(mut self, before: Before) -> Self {
        self.befores.push(before);
        self
    }

    /// Atajo para `before(Before::standalone(f))`.
    pub fn standalone<F, Fut>(self, f: F) -> Self
        where F: Fn() -> Fut + Send + Sync + 'static,
              Fut: std::future::Future<Output = StepOutput> + Send + 'static
    {
        self.before(Before::standalone(f))
    }

    /// Atajo para `before(Before::chained(f))`.
    pub fn chained<F, Fut>(self, f: F) -> Self
        where F: Fn(crate::model::Fields) -> Fut + Send + Sync + 'static,
              Fut: std::future::Future<Output = StepOutput> + Send + 'static
    {
        self.before(Before::chained(f))
    }

    /// Estrategia propia; tiene prioridad sobre la del contexto.
    pub fn with_strategy<S: Strategy + 'static>(self, strategy: S) -> Self {
        self.with_shared_strategy(Arc::new(strategy))
    }

    pub fn with_shared_strategy(mut self, strategy: Arc<dyn Strategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn befores(&self) -> &[Before] {
        &self.befores
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }
}

/// Un blueprint suelto se comporta como una secuencia de uno, así
/// `Context::add` acepta tanto `bp` como `vec![bp1, bp2]`.
impl IntoIterator for Blueprint {
    type Item = Blueprint;
    type IntoIter = std::iter::Once<Blueprint>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self)
    }
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
         .field("name", &self.name)
         .field("fields", &self.fields.keys().collect::<Vec<_>>())
         .field("befores", &self.befores)
         .field("strategy", &self.strategy.as_ref().map(|s| s.name().to_string()))
         .finish()
    }
}
