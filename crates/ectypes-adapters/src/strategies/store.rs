//! `MemoryStoreStrategy`: simula una estrategia que persiste entidades.
//!
//! Cada build recibe un `id` (uuid v4, salvo que los atributos ya traigan
//! uno) y un `created_at` RFC 3339, y se guarda en un `DashMap` indexado por
//! `kind` + `id`. Compartir la estrategia vía `Arc` permite que el test
//! inspeccione luego lo "persistido".
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ectypes_core::{BoxError, Entity, Fields, Strategy};
use log::debug;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AdapterError;

#[derive(Debug, Default)]
pub struct MemoryStoreStrategy {
    records: DashMap<(String, String), Entity>,
}

impl MemoryStoreStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: &str, id: &str) -> Option<Entity> {
        self.records
            .get(&(kind.to_string(), id.to_string()))
            .map(|r| r.value().clone())
    }

    /// Entidades guardadas de un tipo, ordenadas por `created_at` e `id`.
    pub fn records(&self, kind: &str) -> Vec<Entity> {
        let mut out: Vec<Entity> = self.records
                                       .iter()
                                       .filter(|r| r.key().0 == kind)
                                       .map(|r| r.value().clone())
                                       .collect();
        out.sort_by(|a, b| {
               let key = |e: &Entity| (e["created_at"].as_str().map(str::to_owned), id_of(&e["id"]));
               key(a).cmp(&key(b))
           });
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&self) {
        self.records.clear();
    }
}

fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl Strategy for MemoryStoreStrategy {
    fn name(&self) -> &str {
        "memory-store"
    }

    async fn build(&self, kind: &str, mut attributes: Fields) -> Result<Entity, BoxError> {
        let id = match attributes.get("id").and_then(id_of) {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                attributes.insert("id".to_string(), json!(id));
                id
            }
        };
        attributes.entry("created_at")
                  .or_insert_with(|| json!(Utc::now().to_rfc3339()));

        // check-and-insert bajo el lock del shard
        match self.records.entry((kind.to_string(), id.clone())) {
            Entry::Occupied(_) => Err(Box::new(AdapterError::DuplicateId { kind: kind.to_string(),
                                                                           id })),
            Entry::Vacant(slot) => {
                let entity = Entity::new(kind, attributes);
                slot.insert(entity.clone());
                debug!("stored {kind} '{id}'");
                Ok(entity)
            }
        }
    }
}
