//! Entidad final entregada por un build.
//!
//! La entidad pertenece al llamador una vez devuelta; ni el contexto ni el
//! producer guardan referencias a ella.
use std::ops::Index;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Fields;

static NULL: Value = Value::Null;

/// Instancia construida de un tipo de entidad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Nombre del tipo de entidad (clave del blueprint).
    pub kind: String,
    /// Atributos finales: befores, luego fields, luego overrides.
    pub attributes: Fields,
}

impl Entity {
    pub fn new(kind: impl Into<String>, attributes: Fields) -> Self {
        Self { kind: kind.into(),
               attributes }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Deserializa los atributos en un tipo concreto del test.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.attributes))
    }
}

/// Acceso estilo `entity["title"]`; claves ausentes devuelven `Value::Null`.
impl Index<&str> for Entity {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.attributes.get(key).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Project {
        title: String,
        stars: u32,
    }

    fn sample() -> Entity {
        let attrs = crate::model::fields_from(json!({"title": "ectypes", "stars": 3})).unwrap();
        Entity::new("Project", attrs)
    }

    #[test]
    fn index_returns_null_for_missing_keys() {
        let e = sample();
        assert_eq!(e["title"], json!("ectypes"));
        assert!(e["missing"].is_null());
        assert!(e.contains("stars"));
        assert!(!e.contains("missing"));
    }

    #[test]
    fn converts_into_typed_struct() {
        let p: Project = sample().into_typed().expect("typed project");
        assert_eq!(p.title, "ectypes");
        assert_eq!(p.stars, 3);
    }
}
