use crate::config::errors::ConfigError;
use crate::config::EnvironmentProvider;

/// Where a resolved setting came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    pub name: String,
    pub default_value: Option<String>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    /// Start a spec for the environment variable `name`
    pub fn env(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_value: None,
            validator: None,
        }
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the setting with source tracking
    ///
    /// The environment wins over the default. Whichever value is picked is
    /// validated. A setting with neither resolves to `None`.
    pub fn load(&self, env: &dyn EnvironmentProvider) -> Result<Option<ConfigValue>, ConfigError> {
        let resolved = match env.get_var(&self.name) {
            Some(value) => Some(ConfigValue {
                value,
                source: ConfigValueSource::EnvironmentVariable {
                    name: self.name.clone(),
                },
            }),
            None => self.default_value.clone().map(|value| ConfigValue {
                value,
                source: ConfigValueSource::Default,
            }),
        };

        if let Some(config_value) = &resolved {
            self.validate_value(&config_value.value)?;
        }
        Ok(resolved)
    }

    pub fn validate_value(&self, value: &str) -> Result<(), ConfigError> {
        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ConfigError::InvalidSetting {
                setting_name: self.name.clone(),
                reason,
            })?;
        }
        Ok(())
    }

    /// Validator for `host:port` listen addresses
    ///
    /// Only the shape is checked. Host names are resolved when the listener
    /// binds, so `localhost:8000` and `[::1]:8000` are both accepted.
    pub fn validate_host_port(value: &str) -> Result<(), String> {
        let (host, port) = value
            .rsplit_once(':')
            .ok_or_else(|| format!("'{}' is not a host:port address", value))?;

        if host.is_empty() {
            return Err(format!("'{}' has no host", value));
        }
        port.parse::<u16>()
            .map(|_| ())
            .map_err(|e| format!("'{}' has an invalid port: {}", value, e))
    }

    /// Validator for absolute http(s) URLs
    pub fn validate_http_url(value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(format!("'{}' must start with http:// or https://", value))
        }
    }
}
