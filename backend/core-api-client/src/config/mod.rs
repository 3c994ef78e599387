pub mod duration_format;

use crate::CORE_API_DEFAULT_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedSecret};

use std::collections::HashSet;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "core-api.toml";
const CONFIG_DIR_NAME: &str = "core-api";
const CONFIG_VERSION: u32 = 1;
const MAX_BATCH_SIZE_LIMIT: u32 = 10_000;

pub const ENV_CORE_API_URL: &str = "CORE_API_URL";
pub const ENV_CORE_API_NETWORK: &str = "CORE_API_NETWORK";
const ENV_OVERRIDE_NODE_NAME: &str = "env";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_timeout", with = "duration_format")]
    pub timeout: Duration,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_retry_delay", with = "duration_format")]
    pub initial_retry_delay: Duration,
    #[serde(default = "default_max_retry_delay", with = "duration_format")]
    pub max_retry_delay: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            initial_retry_delay: default_initial_retry_delay(),
            max_retry_delay: default_max_retry_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Nodes further behind the highest observed state version are reported as lagging.
    #[serde(default = "default_max_allowed_state_version_lag")]
    pub max_allowed_state_version_lag: i64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            max_allowed_state_version_lag: default_max_allowed_state_version_lag(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreApiNodeConfig {
    pub name: String,
    pub core_api_address: String,
    /// Name of the environment variable holding this node's bearer token.
    #[serde(default)]
    pub auth_token_env: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub disabled_for_transaction_indexing: bool,
    #[serde(default = "default_request_weighting")]
    pub request_weighting: f64,
}

impl CoreApiNodeConfig {
    pub fn new(name: impl Into<String>, core_api_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            core_api_address: core_api_address.into(),
            auth_token_env: None,
            enabled: default_enabled(),
            disabled_for_transaction_indexing: false,
            request_weighting: default_request_weighting(),
        }
    }

    /// Resolve the bearer token through `lookup`.
    ///
    /// Returns `Ok(None)` when no `auth_token_env` is configured.
    pub fn auth_token_with<F>(&self, lookup: F) -> Result<Option<RedactedSecret>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(variable) = self.auth_token_env.as_deref() else {
            return Ok(None);
        };

        match lookup(variable) {
            Some(token) if !token.trim().is_empty() => {
                debug!(
                    "Loaded auth token for node '{}' from {} ({} chars)",
                    self.name,
                    variable,
                    token.len()
                );
                Ok(Some(RedactedSecret::new(token)))
            }
            Some(_) => Err(ConfigError::EnvironmentError {
                location: ErrorLocation::from(Location::caller()),
                variable: variable.to_string(),
                reason: format!("auth token for node '{}' is empty", self.name),
            }),
            None => Err(ConfigError::EnvironmentError {
                location: ErrorLocation::from(Location::caller()),
                variable: variable.to_string(),
                reason: format!("auth token for node '{}' is not set", self.name),
            }),
        }
    }

    /// Resolve the bearer token from the process environment.
    pub fn auth_token(&self) -> Result<Option<RedactedSecret>, ConfigError> {
        self.auth_token_with(|variable| std::env::var(variable).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreApiConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_network")]
    pub network: String,

    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub stream: StreamConfig,

    #[serde(default)]
    pub health: HealthConfig,

    #[serde(default = "default_nodes")]
    pub nodes: Vec<CoreApiNodeConfig>,
}

impl Default for CoreApiConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            network: default_network(),
            request: RequestConfig::default(),
            stream: StreamConfig::default(),
            health: HealthConfig::default(),
            nodes: default_nodes(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_network() -> String {
    "mainnet".to_string()
}
fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
fn default_max_retries() -> u32 {
    3
}
fn default_initial_retry_delay() -> Duration {
    Duration::from_millis(200)
}
fn default_max_retry_delay() -> Duration {
    Duration::from_secs(2)
}
fn default_max_batch_size() -> u32 {
    1000
}
fn default_max_allowed_state_version_lag() -> i64 {
    100
}
fn default_enabled() -> bool {
    true
}
fn default_request_weighting() -> f64 {
    1.0
}
fn default_nodes() -> Vec<CoreApiNodeConfig> {
    vec![CoreApiNodeConfig::new("local", CORE_API_DEFAULT_URL)]
}

// ============================================
// IMPLEMENTATION
// ============================================

impl CoreApiConfig {
    /// Platform config directory, e.g. `~/.config/core-api` on Linux.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
                reason: "platform has no config directory".to_string(),
            })
    }

    /// Load config from {config_dir}/core-api.toml.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load and validate a config file at an explicit path.
    pub fn load_from_path(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            warn!("Failed to read config file {}: {}", config_path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.to_path_buf(),
                source: e,
            }
        })?;

        let config: CoreApiConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML {}: {}", config_path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/core-api.toml using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// the temp file write or the rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, contents).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Rename is atomic on the same filesystem
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] on the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(validation_error(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        if self.network.trim().is_empty() {
            return Err(validation_error("network cannot be empty".to_string()));
        }

        if self.nodes.is_empty() {
            return Err(validation_error(
                "at least one node must be configured".to_string(),
            ));
        }

        if self.stream.max_batch_size == 0 || self.stream.max_batch_size > MAX_BATCH_SIZE_LIMIT {
            return Err(validation_error(format!(
                "Invalid max_batch_size: {} (must be 1-{})",
                self.stream.max_batch_size, MAX_BATCH_SIZE_LIMIT
            )));
        }

        if self.health.max_allowed_state_version_lag < 0 {
            return Err(validation_error(format!(
                "Invalid max_allowed_state_version_lag: {}",
                self.health.max_allowed_state_version_lag
            )));
        }

        if self.request.initial_retry_delay > self.request.max_retry_delay {
            return Err(validation_error(format!(
                "initial_retry_delay ({:?}) exceeds max_retry_delay ({:?})",
                self.request.initial_retry_delay, self.request.max_retry_delay
            )));
        }

        let mut names = HashSet::new();
        for node in &self.nodes {
            if node.name.trim().is_empty() {
                return Err(validation_error("node name cannot be empty".to_string()));
            }

            if !names.insert(node.name.as_str()) {
                return Err(validation_error(format!(
                    "Duplicate node name: {}",
                    node.name
                )));
            }

            if !node.core_api_address.starts_with("http://")
                && !node.core_api_address.starts_with("https://")
            {
                return Err(validation_error(format!(
                    "Invalid URL format for node '{}': {}",
                    node.name, node.core_api_address
                )));
            }

            if node.request_weighting.is_nan() || node.request_weighting <= 0.0 {
                return Err(validation_error(format!(
                    "Invalid request_weighting for node '{}': {} (must be positive)",
                    node.name, node.request_weighting
                )));
            }
        }

        Ok(())
    }

    /// Apply `CORE_API_URL` / `CORE_API_NETWORK` overrides through `lookup`.
    ///
    /// `CORE_API_URL` replaces the node list with a single node named `env`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup(ENV_CORE_API_NETWORK) {
            if network.trim().is_empty() {
                return Err(ConfigError::EnvironmentError {
                    location: ErrorLocation::from(Location::caller()),
                    variable: ENV_CORE_API_NETWORK.to_string(),
                    reason: "value is empty".to_string(),
                });
            }
            info!("Network overridden by {ENV_CORE_API_NETWORK}: {network}");
            self.network = network;
        }

        if let Some(url) = lookup(ENV_CORE_API_URL) {
            if url.trim().is_empty() {
                return Err(ConfigError::EnvironmentError {
                    location: ErrorLocation::from(Location::caller()),
                    variable: ENV_CORE_API_URL.to_string(),
                    reason: "value is empty".to_string(),
                });
            }
            info!("Node list overridden by {ENV_CORE_API_URL}: {url}");
            self.nodes = vec![CoreApiNodeConfig::new(ENV_OVERRIDE_NODE_NAME, url)];
        }

        self.validate()
    }

    /// Load `.env` if present, then apply overrides from the process environment.
    pub fn apply_process_env(&mut self) -> Result<(), ConfigError> {
        if load_dotenv().is_none() {
            debug!("No .env file found - using existing environment variables");
        }
        self.apply_env_overrides(|variable| std::env::var(variable).ok())
    }

    pub fn enabled_nodes(&self) -> impl Iterator<Item = &CoreApiNodeConfig> {
        self.nodes.iter().filter(|node| node.enabled)
    }

    /// Enabled nodes that may be used to read the transaction stream.
    pub fn indexing_nodes(&self) -> impl Iterator<Item = &CoreApiNodeConfig> {
        self.enabled_nodes()
            .filter(|node| !node.disabled_for_transaction_indexing)
    }

    pub fn node(&self, name: &str) -> Option<&CoreApiNodeConfig> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Pick an enabled node with probability proportional to its `request_weighting`.
    ///
    /// `roll` is a uniform sample from `[0, 1)`.
    pub fn weighted_node(&self, roll: f64) -> Option<&CoreApiNodeConfig> {
        select_weighted(self.enabled_nodes(), roll)
    }

    /// Same as [`weighted_node`](Self::weighted_node), restricted to indexing nodes.
    pub fn weighted_indexing_node(&self, roll: f64) -> Option<&CoreApiNodeConfig> {
        select_weighted(self.indexing_nodes(), roll)
    }
}

fn select_weighted<'a>(
    nodes: impl Iterator<Item = &'a CoreApiNodeConfig>,
    roll: f64,
) -> Option<&'a CoreApiNodeConfig> {
    let nodes: Vec<&CoreApiNodeConfig> = nodes
        .filter(|node| node.request_weighting > 0.0)
        .collect();
    let total: f64 = nodes.iter().map(|node| node.request_weighting).sum();

    let mut remaining = roll.clamp(0.0, 1.0) * total;
    for node in &nodes {
        if remaining < node.request_weighting {
            return Some(node);
        }
        remaining -= node.request_weighting;
    }
    // roll == 1.0 or accumulated rounding lands past the end
    nodes.last().copied()
}

#[track_caller]
fn validation_error(reason: String) -> ConfigError {
    ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason,
    }
}

/// Attempts to load `.env` from the current directory, then the executable's directory.
///
/// Returns the path that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(Path::to_path_buf))?;
    let env_path = exe_dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
