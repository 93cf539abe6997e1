// Status feed parsing.
//
// The device publishes its full state as `param.csv`: a fixed sequence of
// fields, each terminated by ".\r\n". The field order is an implicit schema
// baked into the firmware; `ParamField` makes that schema explicit so no
// caller ever touches a magic index.

use crate::error::Error;

/// Positional schema of the `param.csv` status feed.
///
/// The discriminant of each variant is the field's position in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum ParamField {
    /// Communication status marker.
    Comm = 0,
    /// Power state token (`ON` / `OFF`).
    Power = 1,
    /// Operating mode token (`AUTO` / `COOL` / `HEAT` / `NONE`).
    Mode = 2,
    /// Target temperature in whole degrees, or `NONE` while powered off.
    Temperature = 3,
    /// Fan speed status token (`FA`, `F1`..`F5`), or `NONE` while off.
    Fan = 4,
    /// Swing mode token (`UD` / `OFF`).
    Swing = 5,
    /// Room temperature with a comma decimal mark (e.g. `21,5`).
    RoomTemp = 6,
    Timer = 7,
    Remote = 8,
    /// Device-reported error code.
    Error = 9,
    Changed = 10,
    /// Unit display name.
    Name = 11,
    /// Dot-separated bundle of prior settings; temperature at sub-index 2,
    /// fan token at sub-index 4.
    PriorValues = 12,
    User = 13,
    OutdoorTemp = 14,
    Humidity = 15,
    Wind = 16,
    Rain = 17,
    Sun = 18,
}

impl ParamField {
    /// Number of fields in the feed.
    pub const COUNT: usize = 19;

    /// Position of this field in the feed.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Record terminator used by the firmware between fields.
pub(crate) const RECORD_TERMINATOR: &str = ".\r\n";

/// Prior settings remembered by the unit across power-off.
///
/// While the unit is off it reports `NONE` for target temperature and fan,
/// so these are the only source of a sensible value to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorValues {
    pub temperature: i32,
    pub fan_token: String,
}

/// One full status read from the device, parsed into positional fields.
///
/// Immutable once parsed; created fresh on every poll and consumed by the
/// state translator.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    fields: Vec<String>,
}

impl StatusSnapshot {
    /// Parse a raw `param.csv` body into a snapshot.
    ///
    /// Fails with [`Error::Snapshot`] if the body does not contain the full
    /// field sequence.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let mut fields: Vec<String> = body
            .split(RECORD_TERMINATOR)
            .map(ToString::to_string)
            .collect();

        // A well-formed feed ends with the terminator, leaving one empty
        // trailing element after the split.
        if fields.last().is_some_and(String::is_empty) {
            fields.pop();
        }

        if fields.len() < ParamField::COUNT {
            return Err(Error::snapshot(format!(
                "expected {} fields, got {}",
                ParamField::COUNT,
                fields.len()
            )));
        }

        Ok(Self { fields })
    }

    /// Raw field accessor by schema position.
    pub fn field(&self, field: ParamField) -> &str {
        &self.fields[field.index()]
    }

    pub fn power_token(&self) -> &str {
        self.field(ParamField::Power)
    }

    pub fn mode_token(&self) -> &str {
        self.field(ParamField::Mode)
    }

    pub fn temperature_token(&self) -> &str {
        self.field(ParamField::Temperature)
    }

    pub fn fan_token(&self) -> &str {
        self.field(ParamField::Fan)
    }

    pub fn swing_token(&self) -> &str {
        self.field(ParamField::Swing)
    }

    /// Current room temperature. The firmware uses a comma decimal mark.
    pub fn room_temperature(&self) -> Result<f64, Error> {
        let raw = self.field(ParamField::RoomTemp);
        raw.replace(',', ".").parse().map_err(|_| {
            Error::snapshot(format!("unparsable room temperature {raw:?}"))
        })
    }

    /// Prior target temperature and fan token from the prior-values bundle.
    pub fn prior_values(&self) -> Result<PriorValues, Error> {
        let raw = self.field(ParamField::PriorValues);
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() < 5 {
            return Err(Error::snapshot(format!(
                "prior-values bundle {raw:?} has {} parts, expected at least 5",
                parts.len()
            )));
        }
        let temperature = parts[2].parse().map_err(|_| {
            Error::snapshot(format!("unparsable prior temperature {:?}", parts[2]))
        })?;
        Ok(PriorValues {
            temperature,
            fan_token: parts[4].to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn feed(fields: &[&str]) -> String {
        let mut body = fields.join(RECORD_TERMINATOR);
        body.push_str(RECORD_TERMINATOR);
        body
    }

    fn sample() -> String {
        feed(&[
            "OK", "ON", "COOL", "24", "F2", "UD", "21,5", "OFF", "RC", "NONE",
            "0", "Living room", "COOL.0.22.0.F3", "0", "28,0", "40", "0", "0", "0",
        ])
    }

    #[test]
    fn parses_all_fields() {
        let snap = StatusSnapshot::parse(&sample()).unwrap();
        assert_eq!(snap.power_token(), "ON");
        assert_eq!(snap.mode_token(), "COOL");
        assert_eq!(snap.temperature_token(), "24");
        assert_eq!(snap.fan_token(), "F2");
        assert_eq!(snap.swing_token(), "UD");
        assert_eq!(snap.field(ParamField::Name), "Living room");
    }

    #[test]
    fn room_temperature_uses_comma_decimal_mark() {
        let snap = StatusSnapshot::parse(&sample()).unwrap();
        assert!((snap.room_temperature().unwrap() - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn prior_values_come_from_the_dotted_bundle() {
        let snap = StatusSnapshot::parse(&sample()).unwrap();
        let prior = snap.prior_values().unwrap();
        assert_eq!(prior.temperature, 22);
        assert_eq!(prior.fan_token, "F3");
    }

    #[test]
    fn truncated_feed_is_rejected() {
        let body = feed(&["OK", "ON", "COOL"]);
        let err = StatusSnapshot::parse(&body).unwrap_err();
        assert!(matches!(err, Error::Snapshot { .. }));
    }

    #[test]
    fn malformed_prior_bundle_is_rejected() {
        let mut fields = vec![
            "OK", "ON", "COOL", "24", "F2", "UD", "21,5", "OFF", "RC", "NONE",
            "0", "Living room", "garbage", "0", "28,0", "40", "0", "0", "0",
        ];
        fields[ParamField::PriorValues.index()] = "garbage";
        let snap = StatusSnapshot::parse(&feed(&fields)).unwrap();
        assert!(snap.prior_values().is_err());
    }
}
