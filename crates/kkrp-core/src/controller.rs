// ── Climate controller ──
//
// One controller per physical unit. Owns the HTTP client, the remembered
// option set, and the fallback bookkeeping, and exposes the operations a
// host surface needs: poll, typed setters, capability accessors.
//
// Deliberately single-threaded in shape: every mutating operation takes
// `&mut self`, there is no internal locking, and commands are sent
// best-effort with no retry. Callers that want concurrency put the
// controller behind their own mutex.

use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use kkrp_api::{DeviceClient, TransportConfig};

use crate::config::DeviceConfig;
use crate::error::CoreError;
use crate::modes::{FanMode, HvacMode, Power, SwingMode};
use crate::state::{self, AcCommand, AcOptionSet, EntityState, Fallback};

/// Lowest target temperature the infrared remote can set.
pub const MIN_TEMP: i32 = 18;
/// Highest target temperature the infrared remote can set.
pub const MAX_TEMP: i32 = 30;

/// State machine for a single KKRP01A unit.
///
/// Starts uninitialized; the first successful [`poll`](Self::poll)
/// hydrates the remembered option set from the unit, after which setters
/// become available. The option set is never re-synced from later polls:
/// commands mutate it optimistically and the unit is trusted to have
/// accepted them.
pub struct ClimateController {
    client: DeviceClient,
    config: DeviceConfig,
    options: Option<AcOptionSet>,
    fallback: Option<Fallback>,
    room_temperature: Option<f64>,
}

impl ClimateController {
    /// Create a controller for the unit named in `config`. Does not touch
    /// the network; call [`poll`](Self::poll) to hydrate.
    pub fn new(config: DeviceConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = DeviceClient::new(&config.host, &transport)?;
        Ok(Self {
            client,
            config,
            options: None,
            fallback: None,
            room_temperature: None,
        })
    }

    /// Create a controller around an existing client.
    ///
    /// Used by tests to point at a mock server.
    pub fn with_client(client: DeviceClient, config: DeviceConfig) -> Self {
        Self {
            client,
            config,
            options: None,
            fallback: None,
            room_temperature: None,
        }
    }

    // ── Polling ──────────────────────────────────────────────────

    /// Fetch a fresh status snapshot and recompute the reported state.
    ///
    /// Room temperature and fallback bookkeeping refresh on every poll.
    /// The option set hydrates exactly once, on the first fully parsable
    /// snapshot; later snapshots do not overwrite it. Until hydration
    /// succeeds, any unreadable field fails the whole poll so the next
    /// attempt starts over from a clean snapshot.
    pub async fn poll(&mut self) -> Result<EntityState, CoreError> {
        let snapshot = self.client.fetch_snapshot().await?;

        if self.options.is_none() {
            // Hydration seeds the option set for the rest of the
            // controller's lifetime, so a half-readable snapshot is not
            // good enough here.
            let room_temperature = snapshot.room_temperature()?;
            let fallback: Fallback = snapshot.prior_values()?.into();
            self.room_temperature = Some(room_temperature);
            self.fallback = Some(fallback);

            let options = AcOptionSet::from_snapshot(&snapshot, self.fallback.as_ref());
            info!(host = %self.config.host, "hydrated option set: {options:?}");
            self.options = Some(options);
        } else {
            match snapshot.room_temperature() {
                Ok(temp) => self.room_temperature = Some(temp),
                Err(err) => warn!("unreadable room temperature, keeping last: {err}"),
            }
            match snapshot.prior_values() {
                Ok(prior) => self.fallback = Some(prior.into()),
                Err(err) => warn!("unreadable prior values, keeping last: {err}"),
            }
        }

        self.state()
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Merge a partial command into the remembered option set, push the
    /// full payload to the unit, and report the resulting state.
    ///
    /// The merge happens before the send and is not rolled back on
    /// failure: the reported state comes from the merged set either way.
    /// There is no confirm round-trip; the unit is assumed to have
    /// applied the command.
    pub async fn apply_command(&mut self, command: AcCommand) -> Result<EntityState, CoreError> {
        let options = self.options.as_mut().ok_or(CoreError::NotHydrated)?;
        options.merge(&command);
        let payload = state::command_payload(options)?;
        debug!(host = %self.config.host, "sending {payload:?}");
        self.client.send_command(&payload).await?;
        self.state()
    }

    /// Set the target temperature, bounds-checked against the remote's
    /// 18-30 range. Hosts hand over floats; the unit only takes whole
    /// degrees, so the value is truncated first. Silently ignored while
    /// the unit is off: no network traffic, option set untouched.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn set_temperature(&mut self, degrees: f64) -> Result<EntityState, CoreError> {
        let target = degrees.trunc() as i32;
        if !(MIN_TEMP..=MAX_TEMP).contains(&target) {
            return Err(CoreError::InvalidTemperature {
                requested: target,
                min: MIN_TEMP,
                max: MAX_TEMP,
            });
        }
        if !self.power_on()? {
            debug!("unit is off, ignoring temperature change");
            return self.state();
        }
        self.apply_command(AcCommand {
            temperature: Some(target.to_string()),
            ..AcCommand::default()
        })
        .await
    }

    /// Set the fan speed. Silently ignored while the unit is off.
    pub async fn set_fan_mode(&mut self, fan: FanMode) -> Result<EntityState, CoreError> {
        if !self.power_on()? {
            debug!("unit is off, ignoring fan change");
            return self.state();
        }
        self.apply_command(AcCommand {
            fan: Some(fan.status_token().to_owned()),
            ..AcCommand::default()
        })
        .await
    }

    /// Set the swing mode. Silently ignored while the unit is off.
    pub async fn set_swing_mode(&mut self, swing: SwingMode) -> Result<EntityState, CoreError> {
        if !self.power_on()? {
            debug!("unit is off, ignoring swing change");
            return self.state();
        }
        self.apply_command(AcCommand {
            swing: Some(swing.token().to_owned()),
            ..AcCommand::default()
        })
        .await
    }

    /// Set the operating mode. This is the only setter that works while
    /// the unit is off, since it is also how the unit turns on: any mode
    /// but `Off` sends power on alongside the mode token.
    pub async fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<EntityState, CoreError> {
        let command = if mode == HvacMode::Off {
            AcCommand {
                power: Some(Power::Off.token().to_owned()),
                ..AcCommand::default()
            }
        } else {
            AcCommand {
                power: Some(Power::On.token().to_owned()),
                mode: Some(mode.token().to_owned()),
                ..AcCommand::default()
            }
        };
        self.apply_command(command).await
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Recompute the reported state from remembered data, without touching
    /// the network.
    pub fn state(&self) -> Result<EntityState, CoreError> {
        let options = self.options.as_ref().ok_or(CoreError::NotHydrated)?;
        let fallback = self.fallback.as_ref().ok_or(CoreError::NotHydrated)?;
        let current = self.room_temperature.ok_or_else(|| CoreError::MalformedFeed {
            reason: "no readable room temperature yet".to_owned(),
        })?;
        state::entity_state(options, fallback, current)
    }

    pub fn is_hydrated(&self) -> bool {
        self.options.is_some()
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn uid(&self) -> u32 {
        self.config.uid
    }

    pub fn target_temp_step(&self) -> f64 {
        self.config.target_temp_step
    }

    fn power_on(&self) -> Result<bool, CoreError> {
        let options = self.options.as_ref().ok_or(CoreError::NotHydrated)?;
        Ok(Power::from_token(&options.power)?.is_on())
    }
}

// Capability surface reported to the host. Fixed per model, not per unit,
// but exposed on the controller so callers never hardcode the ranges.
#[allow(clippy::unused_self)]
impl ClimateController {
    pub fn min_temp(&self) -> i32 {
        MIN_TEMP
    }

    pub fn max_temp(&self) -> i32 {
        MAX_TEMP
    }

    pub fn hvac_modes(&self) -> Vec<HvacMode> {
        HvacMode::iter().collect()
    }

    pub fn fan_modes(&self) -> Vec<FanMode> {
        FanMode::iter().collect()
    }

    pub fn swing_modes(&self) -> Vec<SwingMode> {
        SwingMode::iter().collect()
    }
}
