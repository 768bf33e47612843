//! Fusión de mapas de atributos.
//!
//! Merge "shallow": las claves de la capa reemplazan a las del destino. Los
//! objetos anidados se reemplazan enteros; no hay deep-merge.

use crate::model::Fields;

/// Aplica `layer` sobre `target` in-place. Las claves que sólo existen en
/// `target` se conservan; el orden de inserción de las nuevas se respeta.
pub fn merge_into(target: &mut Fields, layer: Fields) {
    for (k, v) in layer {
        target.insert(k, v);
    }
}
