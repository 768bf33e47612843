//! Nombres y emails deterministas (round-robin sobre tablas fijas), para
//! que los fixtures sean legibles y reproducibles entre corridas.
use std::sync::atomic::{AtomicUsize, Ordering};

use ectypes_core::Generator;

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Barbara", "Edsger", "Frances", "Donald", "Radia"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Allen", "Knuth", "Perlman"];

fn round_robin(table: &'static [&'static str]) -> impl Generator {
    let next = AtomicUsize::new(0);
    move || table[next.fetch_add(1, Ordering::Relaxed) % table.len()]
}

pub fn first_name() -> impl Generator {
    round_robin(FIRST_NAMES)
}

pub fn last_name() -> impl Generator {
    round_robin(LAST_NAMES)
}

/// "Nombre Apellido"; las dos tablas avanzan juntas.
pub fn full_name() -> impl Generator {
    let next = AtomicUsize::new(0);
    move || {
        let i = next.fetch_add(1, Ordering::Relaxed);
        format!("{} {}", FIRST_NAMES[i % FIRST_NAMES.len()], LAST_NAMES[i % LAST_NAMES.len()])
    }
}

/// `user{n}@{domain}` con n = 1, 2, ...
pub fn email(domain: &str) -> impl Generator {
    let domain = domain.to_string();
    let next = AtomicUsize::new(1);
    move || format!("user{}@{domain}", next.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_name_is_deterministic() {
        let g = full_name();
        assert_eq!(g.generate(), json!("Ada Lovelace"));
        assert_eq!(g.generate(), json!("Grace Hopper"));
        assert_eq!(full_name().generate(), json!("Ada Lovelace"));
    }

    #[test]
    fn first_and_last_wrap_around() {
        let g = first_name();
        for _ in 0..FIRST_NAMES.len() {
            g.generate();
        }
        assert_eq!(g.generate(), json!("Ada"));
        assert_eq!(last_name().generate(), json!("Lovelace"));
    }

    #[test]
    fn emails_count_up() {
        let g = email("example.test");
        assert_eq!(g.generate(), json!("user1@example.test"));
        assert_eq!(g.generate(), json!("user2@example.test"));
    }
}
