use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    DatabaseSettings, LoggingSettings, ServerSettings, Settings, StoreKind, StoreSettings,
};

/// Loads the application settings from `config.toml` and the environment.
///
/// The file is optional; every field has a default. Environment variables
/// prefixed with `GOLDMEDAL` override it, with `__` separating nested keys
/// (`GOLDMEDAL__SERVER__PORT=8080`).
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(config::Environment::with_prefix("GOLDMEDAL").separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
