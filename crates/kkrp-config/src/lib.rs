//! Shared configuration for kkrp tools.
//!
//! TOML device profiles merged with `KKRP_`-prefixed environment
//! variables, and translation to `kkrp_core::DeviceConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kkrp_core::DeviceConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no device named '{name}' in config")]
    UnknownDevice { name: String },

    #[error("no devices configured; add one under [devices.<name>]")]
    NoDevices,

    #[error("multiple devices configured; pass --device or set default_device")]
    AmbiguousDevice,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Device profile used when no `--device` flag is given.
    pub default_device: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named device profiles.
    #[serde(default)]
    pub devices: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_device: None,
            defaults: Defaults::default(),
            devices: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Temperature adjustment step.
    #[serde(default = "default_step")]
    pub target_temp_step: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
            target_temp_step: default_step(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    10
}
fn default_step() -> f64 {
    1.0
}

/// A named device profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Bare IP or hostname of the unit (e.g., "192.168.1.40").
    pub host: String,

    /// Display name; defaults to the stock entity name.
    pub name: Option<String>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,

    /// Override temperature step.
    pub target_temp_step: Option<f64>,

    /// Stable numeric id distinguishing multiple units.
    #[serde(default)]
    pub uid: u32,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "kkrp", "kkrp").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("kkrp");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("KKRP_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Pick a device profile by explicit name, falling back to the config's
/// `default_device`, falling back to the sole profile if only one exists.
pub fn select_profile<'a>(
    config: &'a Config,
    name: Option<&str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    if let Some(name) = name.or_else(|| config.default_device.as_deref()) {
        let (key, profile) = config
            .devices
            .get_key_value(name)
            .ok_or_else(|| ConfigError::UnknownDevice { name: name.into() })?;
        return Ok((key.as_str(), profile));
    }
    match config.devices.len() {
        0 => Err(ConfigError::NoDevices),
        1 => {
            let (name, profile) = config
                .devices
                .iter()
                .next()
                .ok_or(ConfigError::NoDevices)?;
            Ok((name.as_str(), profile))
        }
        _ => Err(ConfigError::AmbiguousDevice),
    }
}

/// Build a `DeviceConfig` from a profile, applying global defaults.
pub fn profile_to_device_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<DeviceConfig, ConfigError> {
    if profile.host.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: "must not be empty".into(),
        });
    }
    let step = profile.target_temp_step.unwrap_or(defaults.target_temp_step);
    if step <= 0.0 {
        return Err(ConfigError::Validation {
            field: "target_temp_step".into(),
            reason: format!("must be positive, got {step}"),
        });
    }
    let timeout = profile.timeout.unwrap_or(defaults.timeout);
    if timeout == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    let base = DeviceConfig::default();
    Ok(DeviceConfig {
        host: profile.host.clone(),
        name: profile.name.clone().unwrap_or(base.name),
        timeout: Duration::from_secs(timeout),
        target_temp_step: step,
        uid: profile.uid,
    })
}

// ── Tests ───────────────────────────────────────────────────────────
