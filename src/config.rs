use crate::domain::{TagOrdering, Version};
use crate::error::{Result, TagitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Represents the complete configuration for tagit.
///
/// Contains tag prefixes, version handling, remote settings, and failure policies.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub prefixes: PrefixesConfig,

    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_production_prefix() -> String {
    "v".to_string()
}

fn default_staging_suffix() -> String {
    "v".to_string()
}

/// Literals used to build tag prefixes.
///
/// Production tags use `production` as is; staging tags use the slot token
/// followed by `staging_suffix` (e.g. "s1" + "v").
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PrefixesConfig {
    #[serde(default = "default_production_prefix")]
    pub production: String,

    #[serde(default = "default_staging_suffix")]
    pub staging_suffix: String,
}

impl Default for PrefixesConfig {
    fn default() -> Self {
        PrefixesConfig {
            production: default_production_prefix(),
            staging_suffix: default_staging_suffix(),
        }
    }
}

fn default_initial_version() -> String {
    "1.0.0".to_string()
}

/// How existing tags are parsed and ordered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VersioningConfig {
    /// Version used when no tag exists yet for the prefix
    #[serde(default = "default_initial_version")]
    pub initial: String,

    #[serde(default)]
    pub ordering: TagOrdering,

    #[serde(default)]
    pub parsing: ParseMode,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            initial: default_initial_version(),
            ordering: TagOrdering::default(),
            parsing: ParseMode::default(),
        }
    }
}

impl VersioningConfig {
    /// Initial version, validated as a plain `X.Y.Z` semantic version.
    pub fn initial_version(&self) -> Result<Version> {
        let parsed = semver::Version::parse(&self.initial).map_err(|e| {
            TagitError::config(format!("Invalid initial version '{}': {}", self.initial, e))
        })?;
        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(TagitError::config(format!(
                "Initial version '{}' must not carry pre-release or build metadata",
                self.initial
            )));
        }
        Ok(parsed.into())
    }
}

/// Whether malformed version components default to zero or fail the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Remote used for refreshing and pushing tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    /// Upper bound for each network-bound git invocation
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What to do when a remote operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the run with the error
    FailFast,
    /// Report a warning and keep going
    BestEffort,
}

fn default_refresh_policy() -> FailurePolicy {
    FailurePolicy::BestEffort
}

fn default_push_policy() -> FailurePolicy {
    FailurePolicy::FailFast
}

/// Failure policies for the remote operations around tag creation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfig {
    #[serde(default = "default_refresh_policy")]
    pub refresh: FailurePolicy,

    #[serde(default = "default_push_policy")]
    pub push: FailurePolicy,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            refresh: default_refresh_policy(),
            push: default_push_policy(),
        }
    }
}

impl Config {
    /// Checks values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        self.versioning.initial_version()?;

        if self.remote.name.trim().is_empty() {
            return Err(TagitError::config("Remote name must not be empty"));
        }
        if self.remote.timeout_secs == 0 {
            return Err(TagitError::config("remote.timeout_secs must be at least 1"));
        }
        if self.prefixes.production.is_empty() {
            return Err(TagitError::config("prefixes.production must not be empty"));
        }
        // Slot tokens end in digits, so the suffix must not extend them ("s1" + "0" reads as "s10")
        match self.prefixes.staging_suffix.chars().next() {
            None => {
                return Err(TagitError::config(
                    "prefixes.staging_suffix must not be empty",
                ))
            }
            Some(c) if c.is_ascii_digit() => {
                return Err(TagitError::config(format!(
                    "prefixes.staging_suffix '{}' must not start with a digit",
                    self.prefixes.staging_suffix
                )))
            }
            Some(_) => {}
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagit.toml` in current directory
/// 3. `.tagit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagit.toml").exists() {
        fs::read_to_string("./tagit.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagit.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates a TOML configuration document.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| TagitError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
