use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DatabaseSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: every setting has a default, and the database URL
/// can arrive via the environment instead. Whatever is loaded is validated
/// before it is returned.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    if config.database.acquire_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "database.acquire_timeout_secs must be at least 1".to_string(),
        ));
    }
    Ok(())
}
