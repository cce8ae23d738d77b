use std::fmt;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ConfigError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Interface the server listens on when SERVER_BIND is not set
pub const DEFAULT_SERVER_BIND: &str = "127.0.0.1:8000";

/// Settings needed to start the HTTP server
#[derive(Clone, PartialEq)]
pub struct ServerSettings {
    bind_address: String,
    public_url: String,
}

impl ServerSettings {
    /// Load server settings through an environment provider
    ///
    /// * `SERVER_BIND` - `host:port` to listen on, default `127.0.0.1:8000`.
    ///   The host may be a name such as `localhost`; it is resolved at bind time.
    /// * `PUBLIC_URL` - base URL advertised in the OpenAPI document,
    ///   default `http://<SERVER_BIND>`
    pub fn from_env_provider(env_provider: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let bind_spec = ConfigSpec::env("SERVER_BIND")
            .default_value(DEFAULT_SERVER_BIND)
            .validator(ConfigSpec::validate_host_port);

        let public_url_spec = ConfigSpec::env("PUBLIC_URL")
            .validator(ConfigSpec::validate_http_url);

        let bind_address = bind_spec
            .load(env_provider)?
            .map(|v| v.value)
            .unwrap_or_else(|| DEFAULT_SERVER_BIND.to_string());

        let public_url = public_url_spec.load(env_provider)?.map(|v| v.value);

        Ok(Self::new(bind_address, public_url))
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    /// Build settings directly
    ///
    /// Without a public URL the bind address is advertised.
    pub fn new(bind_address: impl Into<String>, public_url: Option<String>) -> Self {
        let bind_address = bind_address.into();
        let public_url = public_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{}", bind_address));

        Self {
            bind_address,
            public_url,
        }
    }

    /// Replace the bind address, keeping an explicitly configured public URL
    pub fn with_bind_address(self, bind_address: impl Into<String>) -> Self {
        let advertised_default = self.public_url == format!("http://{}", self.bind_address);
        let public_url = if advertised_default {
            None
        } else {
            Some(self.public_url)
        };

        Self::new(bind_address, public_url)
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_BIND, None)
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("bind_address", &self.bind_address)
            .field("public_url", &self.public_url)
            .finish()
    }
}
