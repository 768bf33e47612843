//! Configuración de ectypes a partir de variables de entorno (.env).
//!
//! Variables reconocidas:
//! - `ECTYPES_DEFAULT_STRATEGY`: `none` | `memory` | `store` (por defecto `none`).
//! - `ECTYPES_LOG_LEVEL`: `off` | `error` | `warn` | `info` | `debug` | `trace`
//!   (por defecto `warn`).
use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use log::{warn, LevelFilter};
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

pub const DEFAULT_STRATEGY_VAR: &str = "ECTYPES_DEFAULT_STRATEGY";
pub const LOG_LEVEL_VAR: &str = "ECTYPES_LOG_LEVEL";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Estrategia que `context_from_config` carga como default del contexto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStrategy {
    /// Sin estrategia: cada blueprint debe traer la suya.
    #[default]
    None,
    Memory,
    Store,
}

impl FromStr for DefaultStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "memory" => Ok(Self::Memory),
            "store" | "memory-store" => Ok(Self::Store),
            _ => Err(ConfigError::InvalidValue { key: DEFAULT_STRATEGY_VAR.to_string(),
                                                 value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EctypesConfig {
    pub default_strategy: DefaultStrategy,
    pub log_level: LevelFilter,
}

impl Default for EctypesConfig {
    fn default() -> Self {
        Self { default_strategy: DefaultStrategy::None,
               log_level: LevelFilter::Warn }
    }
}

impl EctypesConfig {
    /// Lee la configuración del entorno (cargando `.env` si existe).
    pub fn from_env() -> Result<Self, ConfigError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(DEFAULT_STRATEGY_VAR) {
            cfg.default_strategy = raw.parse()?;
        }
        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            cfg.log_level = raw.trim()
                               .parse()
                               .map_err(|_| ConfigError::InvalidValue { key: LOG_LEVEL_VAR.to_string(),
                                                                        value: raw.clone() })?;
        }
        Ok(cfg)
    }
}

/// Instancia global perezosa; valores inválidos caen a los defaults con un warning.
pub static CONFIG: Lazy<EctypesConfig> = Lazy::new(|| {
    EctypesConfig::from_env().unwrap_or_else(|err| {
                                 warn!("{err}; using default configuration");
                                 EctypesConfig::default()
                             })
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = EctypesConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, EctypesConfig::default());
    }

    #[test]
    fn parses_strategy_and_level() {
        let cfg = EctypesConfig::from_lookup(lookup(&[(DEFAULT_STRATEGY_VAR, " Store "), (LOG_LEVEL_VAR, "debug")])).unwrap();
        assert_eq!(cfg.default_strategy, DefaultStrategy::Store);
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = EctypesConfig::from_lookup(lookup(&[(DEFAULT_STRATEGY_VAR, "postgres")])).unwrap_err();
        assert_eq!(err,
                   ConfigError::InvalidValue { key: DEFAULT_STRATEGY_VAR.into(),
                                               value: "postgres".into() });
        assert!(EctypesConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")])).is_err());
    }
}
