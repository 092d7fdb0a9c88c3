use crate::server::error::{config::ConfigError, AppError};

/// Port the liveness endpoint listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_bot_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a closure over a
    /// fixed set of values instead of mutating the process environment.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - `TOKEN` present and `PORT` absent or a valid port
    /// - `Err(AppError::ConfigErr)` - `TOKEN` missing or `PORT` unparseable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token =
            lookup("TOKEN").ok_or_else(|| ConfigError::MissingEnvVar("TOKEN".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_bot_token,
            port,
        })
    }
}
