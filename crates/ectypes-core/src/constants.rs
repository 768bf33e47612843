//! Constantes del core.
//!
//! El mensaje de configuración es parte del contrato observable: los tests de
//! los consumidores lo comparan literalmente, así que no debe cambiar.

/// Mensaje del error que produce `Context::add` cuando un blueprint no
/// resuelve ninguna estrategia (ni propia ni por defecto del contexto).
pub const MISSING_STRATEGY_MESSAGE: &str =
    "Ectypes - please set a default strategy on your context or an overriding _strategy in your blueprint.";

/// Nombre que reportan las estrategias que no sobreescriben `Strategy::name`.
pub const DEFAULT_STRATEGY_NAME: &str = "strategy";
