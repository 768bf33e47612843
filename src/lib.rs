//! ectypes: fixtures para tests construidos desde blueprints.
//!
//! Este crate es la fachada del workspace:
//! - Re-exporta el core (`Context`, `Blueprint`, `Producer`, `Strategy`...).
//! - Expone `adapters` con estrategias y generadores concretos.
//! - Expone `config` para preparar un `Context` desde el entorno.

pub mod config;
pub mod errors;

use std::sync::Arc;

pub use ectypes_adapters as adapters;
pub use ectypes_adapters::generators;
pub use ectypes_core::*;

use config::{DefaultStrategy, EctypesConfig, CONFIG};
use ectypes_adapters::{InMemoryStrategy, MemoryStoreStrategy};

/// Carga `.env`, aplica el nivel de log configurado y devuelve la
/// configuración global.
pub fn init() -> &'static EctypesConfig {
    let cfg: &'static EctypesConfig = &CONFIG;
    log::set_max_level(cfg.log_level);
    cfg
}

/// Crea un `Context` con la estrategia por defecto indicada en `cfg`.
pub fn context_from_config(cfg: &EctypesConfig) -> Context {
    let mut ctx = create_context();
    match cfg.default_strategy {
        DefaultStrategy::None => {}
        DefaultStrategy::Memory => {
            ctx.load(InMemoryStrategy::new());
        }
        DefaultStrategy::Store => {
            ctx.load_shared(Arc::new(MemoryStoreStrategy::new()));
        }
    }
    ctx
}
