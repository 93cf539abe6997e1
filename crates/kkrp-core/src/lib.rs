// kkrp-core: climate state machine for the Daikin KKRP01A LAN controller.
//
// Builds on `kkrp-api` (the raw wire protocol) and adds what a host
// surface needs: typed mode vocabularies, the remembered option set with
// its power-gating and fallback rules, and the per-unit controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod modes;
pub mod state;

pub use config::DeviceConfig;
pub use controller::{ClimateController, MAX_TEMP, MIN_TEMP};
pub use error::CoreError;
pub use modes::{FanMode, HvacMode, Power, SwingMode};
pub use state::{AcCommand, AcOptionSet, EntityState, Fallback};
