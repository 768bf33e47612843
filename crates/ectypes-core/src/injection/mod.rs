//! Capas de valores que se aplican sobre el estado acumulado de un build.
//!
//! El orden es fijo: resultados de befores (en orden de declaración) ->
//! valores generados por los fields -> overrides del llamador. Cada capa
//! sobreescribe las claves homónimas de las anteriores.

pub mod merge;

use log::trace;

use crate::model::Fields;

pub use merge::merge_into;

/// Origen de una capa de valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Resultado parcial del before con ese índice.
    Before(usize),
    Fields,
    Overrides,
}

/// Aplica `values` sobre `state` registrando qué claves se pisaron.
pub fn apply_layer(entity: &str, state: &mut Fields, layer: Layer, values: Fields) {
    if log::log_enabled!(log::Level::Trace) {
        let replaced: Vec<&str> = values.keys()
                                        .filter(|k| state.contains_key(k.as_str()))
                                        .map(String::as_str)
                                        .collect();
        trace!("{entity}: applying {layer:?} ({} keys, replaces {replaced:?})", values.len());
    }
    merge_into(state, values);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields_from;
    use serde_json::{json, Value};

    #[test]
    fn later_layers_win() {
        let mut state = Fields::new();
        apply_layer("T", &mut state, Layer::Before(0), fields_from(json!({"a": 1, "b": 1})).unwrap());
        apply_layer("T", &mut state, Layer::Fields, fields_from(json!({"b": 2, "c": 2})).unwrap());
        apply_layer("T", &mut state, Layer::Overrides, fields_from(json!({"c": 3, "d": 3})).unwrap());
        assert_eq!(Value::Object(state), json!({"a": 1, "b": 2, "c": 3, "d": 3}));
    }
}
