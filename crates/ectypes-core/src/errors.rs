//! Errores del core.
//!
//! `MissingStrategy` es el único error síncrono (lo devuelve `Context::add`).
//! El resto llega siempre a través del `Result` de un build; los errores de
//! colaboradores externos (befores, estrategias) se conservan intactos como
//! `source` y su `Display` es el del error original.

use thiserror::Error;

/// Error opaco de un colaborador externo (before o estrategia).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EctypesError {
    /// Ni el blueprint ni el contexto aportan una estrategia.
    #[error("Ectypes - please set a default strategy on your context or an overriding _strategy in your blueprint.")]
    MissingStrategy { entity: String },

    #[error("no producer registered for entity '{0}'")]
    UnknownEntity(String),

    /// Un before terminó con error; la cadena se cortó en `index`.
    #[error("{source}")]
    StepFailed {
        entity: String,
        index: usize,
        #[source]
        source: BoxError,
    },

    /// Un before devolvió un resultado parcial que no es un objeto JSON.
    #[error("before #{index} of '{entity}' returned a non-object partial result")]
    InvalidPartial { entity: String, index: usize },

    /// La estrategia no pudo finalizar la entidad.
    #[error("{source}")]
    StrategyFailed {
        entity: String,
        #[source]
        source: BoxError,
    },
}

impl EctypesError {
    /// Nombre de la entidad involucrada en el error.
    pub fn entity(&self) -> &str {
        match self {
            Self::MissingStrategy { entity }
            | Self::StepFailed { entity, .. }
            | Self::InvalidPartial { entity, .. }
            | Self::StrategyFailed { entity, .. } => entity,
            Self::UnknownEntity(entity) => entity,
        }
    }

    /// `true` para errores de configuración (no tiene sentido reintentar).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingStrategy { .. } | Self::UnknownEntity(_))
    }
}
