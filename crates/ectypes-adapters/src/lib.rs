//! ectypes-adapters: estrategias y generadores listos para usar.
//!
//! El core sólo conoce el contrato `Strategy` y el trait `Generator`. Aquí
//! viven implementaciones concretas:
//! - `InMemoryStrategy`: finalización identidad.
//! - `MemoryStoreStrategy`: "persiste" en un store concurrente en memoria,
//!   asignando `id` y `created_at`.
//! - `TypedStrategy<T>`: valida la forma contra un tipo serde.
//! - `FailingStrategy`: siempre falla (útil para probar rutas de error).
//! - `generators`: secuencias, uuids, timestamps, nombres deterministas.

pub mod errors;
pub mod generators;
pub mod strategies;

pub use errors::AdapterError;
pub use strategies::{FailingStrategy, InMemoryStrategy, MemoryStoreStrategy, TypedStrategy};
