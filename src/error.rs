/// Errors raised when a UI selection cannot be applied to the product.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown material preset: {0:?}")]
    UnknownPreset(String),

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },
}
