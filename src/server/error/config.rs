use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Raised for a `PORT` that is not a valid u16 or a `SEED_DATABASE` that is
    /// not a recognised boolean.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
