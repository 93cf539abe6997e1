// ── Runtime device configuration ──
//
// Plain value type consumed by the controller. Loading from disk or
// environment lives in `kkrp-config`; this crate never reads either.

use std::time::Duration;

/// Settings for one KKRP01A unit.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Bare IP or hostname of the unit's LAN adapter.
    pub host: String,
    /// Display name for the climate entity.
    pub name: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Temperature adjustment step shown to the host.
    pub target_temp_step: f64,
    /// Stable numeric id distinguishing multiple units.
    pub uid: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            name: "KKRP01A Climate".to_owned(),
            timeout: Duration::from_secs(10),
            target_temp_step: 1.0,
            uid: 0,
        }
    }
}
