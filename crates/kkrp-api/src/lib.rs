// kkrp-api: Async Rust client for the KKRP01A AC controller wire protocol

pub mod client;
pub mod command;
pub mod error;
pub mod status;
pub mod transport;

pub use client::DeviceClient;
pub use command::CommandPayload;
pub use error::Error;
pub use status::{ParamField, PriorValues, StatusSnapshot};
pub use transport::TransportConfig;
