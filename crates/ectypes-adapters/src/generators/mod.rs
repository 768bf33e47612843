//! Generadores de valores para los fields de un blueprint.
//!
//! Todos devuelven closures que implementan `ectypes_core::Generator`. Los
//! que llevan contador lo guardan dentro de la closure: cada generador tiene
//! su propia secuencia.
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use chrono::Utc;
use ectypes_core::Generator;
use serde_json::Value;
use uuid::Uuid;

pub mod names;

pub use names::{email, first_name, full_name, last_name};

/// Siempre el mismo valor.
pub fn constant(value: impl Into<Value>) -> impl Generator {
    let value = value.into();
    move || value.clone()
}

/// Enteros consecutivos desde `start`.
pub fn counter(start: u64) -> impl Generator {
    let next = AtomicU64::new(start);
    move || next.fetch_add(1, Ordering::Relaxed)
}

/// Cadenas `"{prefix}{n}"` con n = 1, 2, ...
pub fn sequence(prefix: &str) -> impl Generator {
    let prefix = prefix.to_string();
    let next = AtomicU64::new(1);
    move || format!("{prefix}{}", next.fetch_add(1, Ordering::Relaxed))
}

/// Uuid v4 como string.
pub fn uuid_v4() -> impl Generator {
    || Uuid::new_v4().to_string()
}

/// Instante actual en RFC 3339 (UTC).
pub fn timestamp_now() -> impl Generator {
    || Utc::now().to_rfc3339()
}

/// Recorre `values` en orden circular. Sin valores produce `null`.
pub fn cycle(values: Vec<Value>) -> impl Generator {
    let next = AtomicUsize::new(0);
    move || {
        if values.is_empty() {
            return Value::Null;
        }
        let i = next.fetch_add(1, Ordering::Relaxed) % values.len();
        values[i].clone()
    }
}
