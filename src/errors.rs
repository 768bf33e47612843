use thiserror::Error;

/// Errores de la configuración leída del entorno.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_format() {
        let err = ConfigError::InvalidValue { key: "ECTYPES_LOG_LEVEL".into(),
                                              value: "loud".into() };
        assert_eq!(err.to_string(), "invalid value 'loud' for ECTYPES_LOG_LEVEL");
    }
}
