//! `kkrp modes` -- list the vocabulary the unit accepts.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::{Table, Tabled, settings::Style};

use kkrp_core::{FanMode, HvacMode, MAX_TEMP, MIN_TEMP, SwingMode};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{print_output, render_json_compact, render_json_pretty};

#[derive(Debug, Serialize)]
struct ModeListing {
    hvac_modes: Vec<String>,
    fan_modes: Vec<String>,
    swing_modes: Vec<String>,
    min_temp: i32,
    max_temp: i32,
}

#[derive(Tabled)]
struct ModeRow {
    #[tabled(rename = "SETTING")]
    setting: &'static str,
    #[tabled(rename = "VALUES")]
    values: String,
}

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let listing = ModeListing {
        hvac_modes: HvacMode::iter().map(|m| m.label().to_owned()).collect(),
        fan_modes: FanMode::iter().map(|m| m.label().to_owned()).collect(),
        swing_modes: SwingMode::iter().map(|m| m.label().to_owned()).collect(),
        min_temp: MIN_TEMP,
        max_temp: MAX_TEMP,
    };

    let rendered = match global.output {
        OutputFormat::Table => {
            let rows = vec![
                ModeRow {
                    setting: "mode",
                    values: listing.hvac_modes.join(", "),
                },
                ModeRow {
                    setting: "fan",
                    values: listing.fan_modes.join(", "),
                },
                ModeRow {
                    setting: "swing",
                    values: listing.swing_modes.join(", "),
                },
                ModeRow {
                    setting: "temp",
                    values: format!("{MIN_TEMP}-{MAX_TEMP}"),
                },
            ];
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => render_json_pretty(&listing),
        OutputFormat::JsonCompact => render_json_compact(&listing),
        OutputFormat::Plain => format!(
            "mode {}\nfan {}\nswing {}\ntemp {MIN_TEMP}-{MAX_TEMP}",
            listing.hvac_modes.join(" "),
            listing.fan_modes.join(" "),
            listing.swing_modes.join(" ")
        ),
    };

    print_output(&rendered, global.quiet);
    Ok(())
}
