//! `TypedStrategy<T>`: la entidad debe deserializar en `T`.
//!
//! Se re-serializa el valor tipado, de modo que la entidad final refleja
//! los defaults y renombres de serde de `T` y descarta claves que `T` no
//! conoce (salvo que `T` use `#[serde(flatten)]`).
use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use ectypes_core::{fields_from, BoxError, Entity, Fields, Strategy};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AdapterError;

pub struct TypedStrategy<T> {
    _shape: PhantomData<fn() -> T>,
}

impl<T> TypedStrategy<T> {
    pub fn new() -> Self {
        Self { _shape: PhantomData }
    }
}

impl<T> Default for TypedStrategy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedStrategy<{}>", std::any::type_name::<T>())
    }
}

#[async_trait]
impl<T> Strategy for TypedStrategy<T> where T: DeserializeOwned + Serialize + 'static
{
    fn name(&self) -> &str {
        "typed"
    }

    async fn build(&self, kind: &str, attributes: Fields) -> Result<Entity, BoxError> {
        let invalid = |source: serde_json::Error| AdapterError::InvalidShape { kind: kind.to_string(),
                                                                               source };
        let typed: T = serde_json::from_value(Value::Object(attributes)).map_err(invalid)?;
        let value = serde_json::to_value(&typed).map_err(invalid)?;
        let attributes = fields_from(value).ok_or_else(|| {
                                               AdapterError::Rejected(format!("{kind} does not serialize to an object"))
                                           })?;
        Ok(Entity::new(kind, attributes))
    }
}
