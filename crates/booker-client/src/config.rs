// crates/booker-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Target service configuration with file and env layering.
// Purpose: Centralize strict parsing of base URL, timeout, and credentials.
// Dependencies: serde, toml, url, thiserror
// ============================================================================

//! ## Overview
//! Configuration layers defaults, an optional TOML file, and environment
//! overrides, in that order. Parsing fails closed: invalid UTF-8, empty
//! values, unknown file keys, malformed URLs, and zero timeouts are all
//! rejected rather than silently defaulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for client configuration overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEnv {
    /// Base URL of the target service.
    BaseUrl,
    /// Per-request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Username for `POST /auth` and basic credentials.
    Username,
    /// Password for `POST /auth` and basic credentials.
    Password,
}

impl ClientEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "BOOKER_BASE_URL",
            Self::TimeoutSeconds => "BOOKER_TIMEOUT_SEC",
            Self::Username => "BOOKER_USERNAME",
            Self::Password => "BOOKER_PASSWORD",
        }
    }
}

/// Default target: the public reference deployment of the booking service.
const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";
/// Default admin username documented by the service.
const DEFAULT_USERNAME: &str = "admin";
/// Default admin password documented by the service.
const DEFAULT_PASSWORD: &str = "password123";
/// Default per-request wall-clock budget.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path}: {message}")]
    Io {
        /// Path that failed.
        path: String,
        /// I/O diagnostic.
        message: String,
    },
    /// Config file was not valid TOML for the expected shape.
    #[error("failed to parse config file {path}: {message}")]
    Parse {
        /// Path that failed.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A setting value failed validation.
    #[error("{name}: {message}")]
    InvalidValue {
        /// Setting or environment variable name.
        name: String,
        /// Validation diagnostic.
        message: String,
    },
}

// ============================================================================
// SECTION: File Shape
// ============================================================================

/// On-disk configuration shape (`booker-verify.toml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Base URL of the target service.
    base_url: Option<String>,
    /// Per-request timeout in seconds.
    timeout_secs: Option<u64>,
    /// Account username.
    username: Option<String>,
    /// Account password.
    password: Option<String>,
}

// ============================================================================
// SECTION: Config
// ============================================================================

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all request paths resolve against.
    pub base_url: Url,
    /// Per-request wall-clock budget.
    pub timeout: Duration,
    /// Account username for authentication.
    pub username: String,
    /// Account password for authentication.
    pub password: String,
}

impl ClientConfig {
    /// Returns the built-in defaults targeting the reference deployment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the built-in base URL fails
    /// to parse; with the shipped constant this does not happen.
    pub fn defaults() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("default base_url", DEFAULT_BASE_URL)?,
            timeout: DEFAULT_TIMEOUT,
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        })
    }

    /// Loads configuration from environment overrides over defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?.apply_env()
    }

    /// Loads configuration from a TOML file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when any value fails validation.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::defaults()?.apply_file(&file)?.apply_env()
    }

    /// Applies file settings over the current values.
    fn apply_file(mut self, file: &ConfigFile) -> Result<Self, ConfigError> {
        if let Some(raw) = &file.base_url {
            self.base_url = parse_base_url("base_url", raw)?;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = validate_timeout("timeout_secs", secs)?;
        }
        if let Some(username) = &file.username {
            self.username.clone_from(username);
        }
        if let Some(password) = &file.password {
            self.password.clone_from(password);
        }
        Ok(self)
    }

    /// Applies environment overrides over the current values.
    fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(raw) = read_env_nonempty(ClientEnv::BaseUrl.as_str())? {
            self.base_url = parse_base_url(ClientEnv::BaseUrl.as_str(), &raw)?;
        }
        if let Some(raw) = read_env_nonempty(ClientEnv::TimeoutSeconds.as_str())? {
            self.timeout = parse_timeout_seconds(ClientEnv::TimeoutSeconds.as_str(), &raw)?;
        }
        if let Some(username) = read_env_nonempty(ClientEnv::Username.as_str())? {
            self.username = username;
        }
        if let Some(password) = read_env_nonempty(ClientEnv::Password.as_str())? {
            self.password = password;
        }
        Ok(self)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses and validates a base URL value.
fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|err| ConfigError::InvalidValue {
        name: name.to_string(),
        message: format!("must be a valid URL: {err}"),
    })
}

/// Validates a timeout expressed in whole seconds.
fn validate_timeout(name: &str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a positive timeout value from an environment variable string.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        message: "must be a positive integer number of seconds".to_string(),
    })?;
    validate_timeout(name, secs)
}

/// Reads an environment variable, enforcing UTF-8 and rejecting empty values.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    let Some(raw) = std::env::var_os(name) else {
        return Ok(None);
    };
    let value = raw.into_string().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        message: "must be valid UTF-8".to_string(),
    })?;
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(Some(value))
}
