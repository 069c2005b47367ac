use thiserror::Error;

/// Configuration errors raised while reading environment variables at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    /// An environment variable is set but could not be parsed.
    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidVar {
        /// Name of the offending variable.
        name: String,
        /// The raw value that failed to parse.
        value: String,
    },
}
