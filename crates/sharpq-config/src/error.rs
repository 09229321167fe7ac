use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or did not match the expected shape.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but holds a value sharpq cannot use.
    #[error("invalid value '{value}' for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
