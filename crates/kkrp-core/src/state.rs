// ── Remembered option set & state translation ──
//
// The unit has no partial-update endpoint: every command POST carries all
// five settings. `AcOptionSet` is the controller's remembered copy of those
// five device tokens, seeded whole from the first status snapshot and
// mutated only by overlay merges. The pure functions here translate
// between that token set and the typed state the host surface reports.

use kkrp_api::{CommandPayload, StatusSnapshot};

use crate::error::CoreError;
use crate::modes::{FanMode, HvacMode, Power, SwingMode};

// ── AcOptionSet ──────────────────────────────────────────────────

/// The five device-token settings the unit is believed to hold.
///
/// Invariant: all five fields are always populated once constructed. A
/// powered-off unit reports `NONE` for temperature and fan; construction
/// substitutes the remembered prior values so later commands never echo
/// `NONE` back at the firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcOptionSet {
    pub power: String,
    pub mode: String,
    pub temperature: String,
    pub fan: String,
    pub swing: String,
}

impl AcOptionSet {
    /// Seed a whole option set from a status snapshot.
    ///
    /// `fallback` fills temperature and fan when the powered-off unit
    /// reports `NONE` for them.
    pub fn from_snapshot(snapshot: &StatusSnapshot, fallback: Option<&Fallback>) -> Self {
        let mut temperature = snapshot.temperature_token().to_owned();
        let mut fan = snapshot.fan_token().to_owned();
        if let Some(fallback) = fallback {
            if temperature == "NONE" {
                temperature = fallback.temperature.to_string();
            }
            if fan == "NONE" {
                fan = fallback.fan_token.clone();
            }
        }
        Self {
            power: snapshot.power_token().to_owned(),
            mode: snapshot.mode_token().to_owned(),
            temperature,
            fan,
            swing: snapshot.swing_token().to_owned(),
        }
    }

    /// Overlay-merge a partial command: only the fields the command names
    /// change, the rest keep their remembered values.
    pub fn merge(&mut self, command: &AcCommand) {
        if let Some(power) = &command.power {
            self.power = power.clone();
        }
        if let Some(mode) = &command.mode {
            self.mode = mode.clone();
        }
        if let Some(temperature) = &command.temperature {
            self.temperature = temperature.clone();
        }
        if let Some(fan) = &command.fan {
            self.fan = fan.clone();
        }
        if let Some(swing) = &command.swing {
            self.swing = swing.clone();
        }
    }

    fn power_state(&self) -> Result<Power, CoreError> {
        Power::from_token(&self.power)
    }
}

// ── AcCommand ────────────────────────────────────────────────────

/// Partial settings overlay built by the controller's setters.
///
/// Fields hold device STATUS tokens (`ON`, `COOL`, `F3`, `UD`); command
/// vocabulary rendering happens at payload time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcCommand {
    pub power: Option<String>,
    pub mode: Option<String>,
    pub temperature: Option<String>,
    pub fan: Option<String>,
    pub swing: Option<String>,
}

// ── Fallback ─────────────────────────────────────────────────────

/// Remembered prior temperature and fan, refreshed from the unit's own
/// prior-values field on every poll. Reported while the unit is off so
/// the host never shows `NONE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub temperature: i32,
    pub fan_token: String,
}

impl From<kkrp_api::PriorValues> for Fallback {
    fn from(prior: kkrp_api::PriorValues) -> Self {
        Self {
            temperature: prior.temperature,
            fan_token: prior.fan_token,
        }
    }
}

// ── EntityState ──────────────────────────────────────────────────

/// Typed climate state as reported to the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    pub current_temperature: f64,
    pub target_temperature: i32,
    pub hvac_mode: HvacMode,
    pub fan_mode: FanMode,
    pub swing_mode: SwingMode,
}

/// Translate a remembered option set into reported entity state.
///
/// Pure. Temperature and fan are power-gated: while the unit is off they
/// come from `fallback`, not from the option set. Swing is reported
/// ungated, and power off always reports [`HvacMode::Off`] regardless of
/// the mode token.
pub fn entity_state(
    options: &AcOptionSet,
    fallback: &Fallback,
    current_temperature: f64,
) -> Result<EntityState, CoreError> {
    let power = options.power_state()?;
    let swing_mode = SwingMode::from_token(&options.swing)?;

    let (hvac_mode, target_temperature, fan_mode) = if power.is_on() {
        let mode = HvacMode::from_token(&options.mode)?;
        let target = match options.temperature.as_str() {
            "NONE" => fallback.temperature,
            raw => raw.parse::<i32>().map_err(|_| CoreError::MalformedFeed {
                reason: format!("unparsable target temperature token {raw:?}"),
            })?,
        };
        let fan = FanMode::from_status_token(&options.fan)?;
        (mode, target, fan)
    } else {
        let fan = FanMode::from_status_token(&fallback.fan_token)?;
        (HvacMode::Off, fallback.temperature, fan)
    };

    Ok(EntityState {
        current_temperature,
        target_temperature,
        hvac_mode,
        fan_mode,
        swing_mode,
    })
}

// ── Command rendering ────────────────────────────────────────────

/// Render a remembered option set into the wire payload.
///
/// The fan status token is remapped through the command vocabulary
/// (`F3` becomes `Fun3`); temperature goes out as a bare number; the
/// remaining tokens are first-letter-capitalized, which is the spelling
/// the command endpoint accepts (`ON` becomes `On`, `UD` becomes `Ud`).
pub fn command_payload(options: &AcOptionSet) -> Result<CommandPayload, CoreError> {
    let fan = FanMode::from_status_token(&options.fan)?.command_token();
    Ok(CommandPayload {
        power: capitalize(&options.power),
        mode: capitalize(&options.mode),
        temperature: options.temperature.clone(),
        fan: fan.to_owned(),
        swing: capitalize(&options.swing),
    })
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options_on() -> AcOptionSet {
        AcOptionSet {
            power: "ON".into(),
            mode: "COOL".into(),
            temperature: "24".into(),
            fan: "F2".into(),
            swing: "UD".into(),
        }
    }

    fn fallback() -> Fallback {
        Fallback {
            temperature: 22,
            fan_token: "F3".into(),
        }
    }

    #[test]
    fn powered_on_state_reads_from_options() {
        let state = entity_state(&options_on(), &fallback(), 21.5).unwrap();
        assert_eq!(state.hvac_mode, HvacMode::Cool);
        assert_eq!(state.target_temperature, 24);
        assert_eq!(state.fan_mode, FanMode::Level2);
        assert_eq!(state.swing_mode, SwingMode::On);
        assert!((state.current_temperature - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn powered_off_state_reports_fallback() {
        let mut options = options_on();
        options.power = "OFF".into();
        options.mode = "NONE".into();
        let state = entity_state(&options, &fallback(), 21.5).unwrap();
        assert_eq!(state.hvac_mode, HvacMode::Off);
        assert_eq!(state.target_temperature, 22);
        assert_eq!(state.fan_mode, FanMode::Level3);
        // Swing stays ungated.
        assert_eq!(state.swing_mode, SwingMode::On);
    }

    #[test]
    fn none_temperature_token_reports_fallback() {
        let mut options = options_on();
        options.temperature = "NONE".into();
        let state = entity_state(&options, &fallback(), 21.5).unwrap();
        assert_eq!(state.target_temperature, 22);
    }

    #[test]
    fn junk_temperature_token_is_an_error() {
        let mut options = options_on();
        options.temperature = "2b".into();
        assert!(matches!(
            entity_state(&options, &fallback(), 21.5),
            Err(CoreError::MalformedFeed { .. })
        ));
    }

    #[test]
    fn unknown_mode_token_is_an_error() {
        let mut options = options_on();
        options.mode = "DRY".into();
        assert!(matches!(
            entity_state(&options, &fallback(), 20.0),
            Err(CoreError::UnknownMode { axis: "hvac", .. })
        ));
    }

    #[test]
    fn merge_only_touches_named_fields() {
        let mut options = options_on();
        options.merge(&AcCommand {
            temperature: Some("26".into()),
            ..AcCommand::default()
        });
        assert_eq!(options.temperature, "26");
        assert_eq!(options.mode, "COOL");
        assert_eq!(options.fan, "F2");
    }

    #[test]
    fn payload_uses_command_vocabulary() {
        let payload = command_payload(&options_on()).unwrap();
        assert_eq!(payload.power, "On");
        assert_eq!(payload.mode, "Cool");
        assert_eq!(payload.temperature, "24");
        assert_eq!(payload.fan, "Fun2");
        assert_eq!(payload.swing, "Ud");
    }

    #[test]
    fn payload_rejects_unknown_fan_token() {
        let mut options = options_on();
        options.fan = "F7".into();
        assert!(command_payload(&options).is_err());
    }

    #[test]
    fn seeding_substitutes_prior_values_when_off() {
        let feed = [
            "OK", "OFF", "NONE", "NONE", "NONE", "OFF", "19,0", "OFF", "RC", "NONE", "0", "Attic",
            "HEAT.0.23.0.F4", "0", "12,5", "55", "0", "0", "0",
        ]
        .join(".\r\n")
            + ".\r\n";
        let snapshot = StatusSnapshot::parse(&feed).unwrap();
        let prior: Fallback = snapshot.prior_values().unwrap().into();
        let options = AcOptionSet::from_snapshot(&snapshot, Some(&prior));
        assert_eq!(options.temperature, "23");
        assert_eq!(options.fan, "F4");
        assert_eq!(options.power, "OFF");
        assert_eq!(options.mode, "NONE");
    }
}
