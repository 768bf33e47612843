//! Befores: pasos de dependencia asíncronos que preparan el estado de un build.
//!
//! Hay dos formas, declaradas explícitamente con la variante de `Before`:
//! - `Standalone`: no recibe estado (equivale a `(done)`).
//! - `Chained`: recibe el estado acumulado de todos los befores previos
//!   (equivale a `(state, done)`).
//!
//! Cada paso devuelve un resultado parcial (`Value::Object`, o `Value::Null`
//! si no aporta nada) o un error que corta la cadena.
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::BoxError;
use crate::model::Fields;

/// Resultado de un before.
pub type StepOutput = Result<Value, BoxError>;

/// Completa un before con un resultado parcial.
pub fn done(partial: Value) -> StepOutput {
    Ok(partial)
}

/// Completa un before con error.
pub fn fail(error: impl Into<BoxError>) -> StepOutput {
    Err(error.into())
}

/// Before sin acceso al estado acumulado.
#[async_trait]
pub trait StandaloneStep: Send + Sync {
    async fn run(&self) -> StepOutput;
}

/// Before que lee el estado acumulado por los pasos anteriores.
#[async_trait]
pub trait ChainedStep: Send + Sync {
    async fn run(&self, state: &Fields) -> StepOutput;
}

struct FnStandalone<F>(F);

#[async_trait]
impl<F, Fut> StandaloneStep for FnStandalone<F>
    where F: Fn() -> Fut + Send + Sync,
          Fut: Future<Output = StepOutput> + Send + 'static
{
    async fn run(&self) -> StepOutput {
        (self.0)().await
    }
}

struct FnChained<F>(F);

#[async_trait]
impl<F, Fut> ChainedStep for FnChained<F>
    where F: Fn(Fields) -> Fut + Send + Sync,
          Fut: Future<Output = StepOutput> + Send + 'static
{
    async fn run(&self, state: &Fields) -> StepOutput {
        (self.0)(state.clone()).await
    }
}

/// Paso de dependencia de un blueprint. El orden dentro del blueprint es
/// el orden de ejecución.
#[derive(Clone)]
pub enum Before {
    Standalone(Arc<dyn StandaloneStep>),
    Chained(Arc<dyn ChainedStep>),
}

impl Before {
    /// Before sin estado a partir de una closure async.
    pub fn standalone<F, Fut>(f: F) -> Self
        where F: Fn() -> Fut + Send + Sync + 'static,
              Fut: Future<Output = StepOutput> + Send + 'static
    {
        Self::Standalone(Arc::new(FnStandalone(f)))
    }

    /// Before encadenado a partir de una closure async; recibe una copia del
    /// estado acumulado.
    pub fn chained<F, Fut>(f: F) -> Self
        where F: Fn(Fields) -> Fut + Send + Sync + 'static,
              Fut: Future<Output = StepOutput> + Send + 'static
    {
        Self::Chained(Arc::new(FnChained(f)))
    }

    pub fn from_standalone<S: StandaloneStep + 'static>(step: S) -> Self {
        Self::Standalone(Arc::new(step))
    }

    pub fn from_chained<S: ChainedStep + 'static>(step: S) -> Self {
        Self::Chained(Arc::new(step))
    }

    /// Aridad en forma de callback: 1 para `(done)`, 2 para `(state, done)`.
    pub fn arity(&self) -> usize {
        match self {
            Self::Standalone(_) => 1,
            Self::Chained(_) => 2,
        }
    }

    pub(crate) async fn run(&self, state: &Fields) -> StepOutput {
        match self {
            Self::Standalone(step) => step.run().await,
            Self::Chained(step) => step.run(state).await,
        }
    }
}

impl fmt::Debug for Before {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone(_) => f.write_str("Before::Standalone"),
            Self::Chained(_) => f.write_str("Before::Chained"),
        }
    }
}
