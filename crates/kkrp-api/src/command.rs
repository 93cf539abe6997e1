// Command payload wire shape.
//
// Commands are POSTed to the device root as a form-encoded body of exactly
// five keys. The firmware expects its own field names (`wiON`, `wiMODE`,
// ...) and vocabulary; rendering device tokens into this shape is the state
// translator's job in `kkrp-core` -- this type only fixes the wire layout.

use serde::Serialize;

/// Full five-key command body for `POST http://<device>/`.
///
/// Always sent whole: the device has no notion of a partial update, so the
/// controller merges user intent into its remembered option set and renders
/// the complete result here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPayload {
    #[serde(rename = "wiON")]
    pub power: String,
    #[serde(rename = "wiMODE")]
    pub mode: String,
    #[serde(rename = "wiTEMP")]
    pub temperature: String,
    #[serde(rename = "wiFUN")]
    pub fan: String,
    #[serde(rename = "wiSWNG")]
    pub swing: String,
}
