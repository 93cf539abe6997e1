// ── Mode vocabularies ──
//
// The device speaks three distinct vocabularies: status tokens in the
// `param.csv` feed, command tokens in the POST body, and the labels the
// host surface shows. Each axis is a closed enum with explicit lookups in
// both directions. An unrecognized token is always a hard error; guessing
// a default would silently misreport the unit's state.

use strum::EnumIter;

use crate::error::CoreError;

// ── Power ────────────────────────────────────────────────────────

/// Unit power as reported in the status feed (`ON` / `OFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn from_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(CoreError::unknown_mode("power", token)),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

// ── HvacMode ─────────────────────────────────────────────────────

/// Operating mode, in the host's generic vocabulary.
///
/// The device reports `NONE` when powered off; that token maps to
/// [`HvacMode::Off`] here and round-trips back to `NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum HvacMode {
    Auto,
    Cool,
    Heat,
    Off,
}

impl HvacMode {
    /// Parse a device status token (`AUTO`, `COOL`, `HEAT`, `NONE`).
    pub fn from_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "AUTO" => Ok(Self::Auto),
            "COOL" => Ok(Self::Cool),
            "HEAT" => Ok(Self::Heat),
            "NONE" => Ok(Self::Off),
            _ => Err(CoreError::unknown_mode("hvac", token)),
        }
    }

    /// Parse a host label (`auto`, `cool`, `heat`, `off`).
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label {
            "auto" => Ok(Self::Auto),
            "cool" => Ok(Self::Cool),
            "heat" => Ok(Self::Heat),
            "off" => Ok(Self::Off),
            _ => Err(CoreError::unknown_mode("hvac", label)),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Cool => "COOL",
            Self::Heat => "HEAT",
            Self::Off => "NONE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for HvacMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── FanMode ──────────────────────────────────────────────────────

/// Fan speed. Carries THREE spellings: the pipe-glyph host label, the
/// short status token from the feed, and the longer token the command
/// endpoint expects. The firmware does not accept status tokens in
/// commands, so the distinction is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FanMode {
    Auto,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl FanMode {
    /// Parse a status token (`FA`, `F1`..`F5`).
    pub fn from_status_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "FA" => Ok(Self::Auto),
            "F1" => Ok(Self::Level1),
            "F2" => Ok(Self::Level2),
            "F3" => Ok(Self::Level3),
            "F4" => Ok(Self::Level4),
            "F5" => Ok(Self::Level5),
            _ => Err(CoreError::unknown_mode("fan", token)),
        }
    }

    /// Parse a host label (`auto`, `|`..`|||||`).
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label {
            "auto" => Ok(Self::Auto),
            "|" => Ok(Self::Level1),
            "||" => Ok(Self::Level2),
            "|||" => Ok(Self::Level3),
            "||||" => Ok(Self::Level4),
            "|||||" => Ok(Self::Level5),
            _ => Err(CoreError::unknown_mode("fan", label)),
        }
    }

    pub fn status_token(self) -> &'static str {
        match self {
            Self::Auto => "FA",
            Self::Level1 => "F1",
            Self::Level2 => "F2",
            Self::Level3 => "F3",
            Self::Level4 => "F4",
            Self::Level5 => "F5",
        }
    }

    /// The token the command endpoint expects (`FAuto`, `Fun1`..`Fun5`).
    pub fn command_token(self) -> &'static str {
        match self {
            Self::Auto => "FAuto",
            Self::Level1 => "Fun1",
            Self::Level2 => "Fun2",
            Self::Level3 => "Fun3",
            Self::Level4 => "Fun4",
            Self::Level5 => "Fun5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Level1 => "|",
            Self::Level2 => "||",
            Self::Level3 => "|||",
            Self::Level4 => "||||",
            Self::Level5 => "|||||",
        }
    }
}

impl std::fmt::Display for FanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── SwingMode ────────────────────────────────────────────────────

/// Vertical swing. The unit only has up/down swing (`UD`) or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SwingMode {
    On,
    Off,
}

impl SwingMode {
    /// Parse a device status token (`UD`, `OFF`).
    pub fn from_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "UD" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(CoreError::unknown_mode("swing", token)),
        }
    }

    /// Parse a host label (`On`, `Off`).
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label {
            "On" => Ok(Self::On),
            "Off" => Ok(Self::Off),
            _ => Err(CoreError::unknown_mode("swing", label)),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::On => "UD",
            Self::Off => "OFF",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

impl std::fmt::Display for SwingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Tests ────────────────────────────────────────────────────────
