//! Mapa de atributos usado en todo el pipeline.
//!
//! `Fields` es un `serde_json::Map` con orden de inserción preservado
//! (feature `preserve_order`). Representa tanto el estado acumulado de los
//! befores como los overrides del llamador y los atributos finales.

use serde_json::{Map, Value};

/// Mapa plano nombre de campo -> valor JSON.
pub type Fields = Map<String, Value>;

/// Convierte un `Value` en `Fields`.
///
/// Devuelve `None` si el valor no es un objeto. `Value::Null` se interpreta
/// como "sin resultado" y produce un mapa vacío.
pub fn fields_from(value: Value) -> Option<Fields> {
    match value {
        Value::Object(map) => Some(map),
        Value::Null => Some(Fields::new()),
        _ => None,
    }
}
