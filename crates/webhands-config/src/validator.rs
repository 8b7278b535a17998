//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Key delays above this are allowed but make typing visibly slow.
const SLOW_KEY_DELAY_MS: u64 = 1000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a [`ConfigError::InvalidValue`].
    pub fn ensure_valid(self) -> Result<Self, ConfigError> {
        match self.errors.first() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path.clone(),
                message: error.message.clone(),
            }),
            None => Ok(self),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_browser(config, &mut result);
        Self::validate_keyboard(config, &mut result);
        Self::validate_log(config, &mut result);

        result
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        let endpoint = &config.browser.endpoint;
        if endpoint.is_empty() {
            result.add_error(ValidationError::new(
                "browser.endpoint",
                "Endpoint cannot be empty",
            ));
        } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            result.add_error(ValidationError::new(
                "browser.endpoint",
                "endpoint must start with http:// or https://",
            ));
        }

        if config.browser.command_timeout_ms == 0 {
            result.add_error(ValidationError::new(
                "browser.command_timeout_ms",
                "command_timeout_ms must be greater than 0",
            ));
        }
    }

    fn validate_keyboard(config: &Config, result: &mut ValidationResult) {
        if config.keyboard.key_delay_ms > SLOW_KEY_DELAY_MS {
            result.add_warning(ValidationWarning::new(
                "keyboard.key_delay_ms",
                format!(
                    "key_delay_ms is very high (>{}ms), typing will be slow",
                    SLOW_KEY_DELAY_MS
                ),
            ));
        }
    }

    fn validate_log(config: &Config, result: &mut ValidationResult) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level = config.log.level.to_lowercase();
        // Full filter directives (e.g. `webhands=debug`) are accepted as-is.
        if !level.contains('=') && !valid_levels.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "log.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.log.level, valid_levels
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
