//! CLI-side configuration resolution.
//!
//! Thin layer over `kkrp_config` that applies `GlobalOpts` overrides:
//! `--host` builds an ad hoc device, `--device` picks a profile,
//! `--timeout` overrides either.

use std::time::Duration;

use kkrp_config::{Config, load_config_or_default, profile_to_device_config, select_profile};
use kkrp_core::DeviceConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the device to talk to from flags, env, and config file.
///
/// Returns the display name used in output alongside the config.
pub fn resolve_device(global: &GlobalOpts) -> Result<(String, DeviceConfig), CliError> {
    let config = load_config_or_default();
    resolve_device_with(global, &config)
}

pub fn resolve_device_with(
    global: &GlobalOpts,
    config: &Config,
) -> Result<(String, DeviceConfig), CliError> {
    let mut device = if let Some(host) = &global.host {
        if host.trim().is_empty() {
            return Err(CliError::Validation {
                field: "host".into(),
                reason: "must not be empty".into(),
            });
        }
        let mut device = DeviceConfig {
            host: host.clone(),
            ..DeviceConfig::default()
        };
        device.timeout = Duration::from_secs(config.defaults.timeout);
        device.target_temp_step = config.defaults.target_temp_step;
        device
    } else {
        let (_, profile) = select_profile(config, global.device.as_deref())?;
        profile_to_device_config(profile, &config.defaults)?
    };

    if let Some(timeout) = global.timeout {
        if timeout == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        device.timeout = Duration::from_secs(timeout);
    }

    let name = device.name.clone();
    Ok((name, device))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kkrp_config::Profile;

    use super::*;

    fn opts() -> GlobalOpts {
        GlobalOpts {
            device: None,
            host: None,
            output: crate::cli::OutputFormat::Table,
            verbose: 0,
            quiet: false,
            timeout: None,
        }
    }

    #[test]
    fn host_flag_builds_ad_hoc_device() {
        let mut global = opts();
        global.host = Some("10.0.0.9".into());
        let (_, device) = resolve_device_with(&global, &Config::default()).unwrap();
        assert_eq!(device.host, "10.0.0.9");
        assert_eq!(device.timeout, Duration::from_secs(10));
    }

    #[test]
    fn timeout_flag_overrides_profile() {
        let mut config = Config::default();
        config.devices.insert(
            "attic".into(),
            Profile {
                host: "10.0.0.2".into(),
                name: Some("Attic".into()),
                timeout: Some(5),
                target_temp_step: None,
                uid: 0,
            },
        );
        let mut global = opts();
        global.device = Some("attic".into());
        global.timeout = Some(20);
        let (name, device) = resolve_device_with(&global, &config).unwrap();
        assert_eq!(name, "Attic");
        assert_eq!(device.timeout, Duration::from_secs(20));
    }

    #[test]
    fn no_selection_is_a_usage_error() {
        let result = resolve_device_with(&opts(), &Config::default());
        assert!(matches!(result, Err(CliError::NoDevice)));
    }
}
