//! Output formatting: table, JSON, plain.
//!
//! Renders climate state in the format selected by `--output`. Table uses
//! `tabled`, JSON uses serde, plain emits `key value` lines for scripting.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use kkrp_core::{EntityState, HvacMode};

use crate::cli::OutputFormat;

// ── Status view ──────────────────────────────────────────────────────

/// One unit's state, flattened for rendering.
#[derive(Debug, Serialize, Tabled)]
pub struct StatusView {
    #[tabled(rename = "DEVICE")]
    pub device: String,
    #[tabled(rename = "MODE")]
    pub mode: String,
    #[tabled(rename = "TARGET")]
    pub target: String,
    #[tabled(rename = "CURRENT")]
    pub current: String,
    #[tabled(rename = "FAN")]
    pub fan: String,
    #[tabled(rename = "SWING")]
    pub swing: String,
}

impl StatusView {
    pub fn new(device: &str, state: &EntityState) -> Self {
        Self {
            device: device.to_owned(),
            mode: state.hvac_mode.label().to_owned(),
            target: format!("{}\u{b0}C", state.target_temperature),
            current: format!("{:.1}\u{b0}C", state.current_temperature),
            fan: state.fan_mode.label().to_owned(),
            swing: state.swing_mode.label().to_owned(),
        }
    }
}

/// Render one status view in the chosen format.
pub fn render_status(format: &OutputFormat, view: &StatusView) -> String {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new(std::slice::from_ref(view));
            table.with(Style::rounded());
            if should_color() {
                return format!("{}\n{table}", view.device.bold());
            }
            table.to_string()
        }
        OutputFormat::Json => render_json_pretty(view),
        OutputFormat::JsonCompact => render_json_compact(view),
        OutputFormat::Plain => format!(
            "mode {}\ntarget {}\ncurrent {}\nfan {}\nswing {}",
            view.mode, view.target, view.current, view.fan, view.swing
        ),
    }
}

/// Color the hvac mode label for interactive terminals.
pub fn colored_mode(mode: HvacMode) -> String {
    if !should_color() {
        return mode.label().to_owned();
    }
    match mode {
        HvacMode::Cool => mode.label().blue().to_string(),
        HvacMode::Heat => mode.label().red().to_string(),
        HvacMode::Auto => mode.label().green().to_string(),
        HvacMode::Off => mode.label().dimmed().to_string(),
    }
}

fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

/// Pretty-printed JSON.
pub fn render_json_pretty<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Compact single-line JSON.
pub fn render_json_compact<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}
