use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Insert demo categories and tasks into an empty database at startup.
    pub seed_database: bool,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// Every variable is optional; see `from_lookup` for defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Variables
    /// - `DATABASE_URL` - defaults to `sqlite::memory:`
    /// - `HOST` - defaults to `0.0.0.0`
    /// - `PORT` - defaults to `8080`, must parse as `u16`
    /// - `SEED_DATABASE` - defaults to `true`, accepts `true/false/1/0/yes/no`
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables resolved
    /// - `Err(AppError::ConfigErr)` - A variable was set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let seed_database = match lookup("SEED_DATABASE") {
            Some(value) => parse_bool("SEED_DATABASE", value)?,
            None => true,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_database,
        })
    }

    /// Socket address the HTTP listener binds to, formatted as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
