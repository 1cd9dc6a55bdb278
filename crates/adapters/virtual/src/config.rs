//! Fixture configuration — TOML file with environment variable overrides.
//!
//! Looks for `btsim.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use serde::Deserialize;

use btsim_domain::power::PowerState;

/// Configuration for the virtual radio.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualRadioConfig {
    /// Power state a freshly constructed radio reports.
    pub initial_power: PowerState,
    /// Capacity of the broadcast event channel. Must be non-zero.
    pub event_capacity: usize,
}

impl Default for VirtualRadioConfig {
    fn default() -> Self {
        Self {
            initial_power: PowerState::Off,
            event_capacity: 16,
        }
    }
}

impl VirtualRadioConfig {
    /// Load configuration from `btsim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("btsim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BTSIM_INITIAL_POWER") {
            if let Ok(power) = val.parse() {
                self.initial_power = power;
            }
        }
        if let Ok(val) = std::env::var("BTSIM_EVENT_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                self.event_capacity = capacity;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::Validation(
                "event_capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = VirtualRadioConfig::default();
        assert_eq!(config.initial_power, PowerState::Off);
        assert_eq!(config.event_capacity, 16);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: VirtualRadioConfig = toml::from_str("").unwrap();
        assert_eq!(config.initial_power, PowerState::Off);
        assert_eq!(config.event_capacity, 16);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            initial_power = 'on'
            event_capacity = 64
        ";
        let config: VirtualRadioConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.initial_power, PowerState::On);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn should_return_error_when_power_value_is_unknown() {
        let result: Result<VirtualRadioConfig, _> = toml::from_str("initial_power = 'maybe'");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_event_capacity() {
        let config = VirtualRadioConfig {
            event_capacity: 0,
            ..VirtualRadioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
