mod config_spec;
mod env_provider;
mod errors;
mod logging;
mod server_settings;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ConfigError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use server_settings::{ServerSettings, DEFAULT_SERVER_BIND};
