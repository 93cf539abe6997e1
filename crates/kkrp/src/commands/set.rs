//! `kkrp set` -- change one setting.
//!
//! Every set starts with a poll: the controller must know the unit's
//! remembered option set before it can merge a change into it.

use kkrp_core::{FanMode, HvacMode, SwingMode};

use crate::cli::{GlobalOpts, SetArgs, SetCommand};
use crate::error::CliError;
use crate::output::{StatusView, print_output, render_status};

pub async fn handle(args: &SetArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (name, mut controller) = super::controller_for(global)?;
    let host = controller.host().to_owned();

    controller
        .poll()
        .await
        .map_err(|e| CliError::from_core(e, &host))?;

    let state = match &args.setting {
        SetCommand::Temp { degrees } => controller.set_temperature(*degrees).await,
        SetCommand::Mode { mode } => {
            let mode = parse_hvac_mode(mode)?;
            controller.set_hvac_mode(mode).await
        }
        SetCommand::Fan { speed } => {
            let fan = parse_fan_mode(speed)?;
            controller.set_fan_mode(fan).await
        }
        SetCommand::Swing { state } => {
            let swing = parse_swing_mode(state)?;
            controller.set_swing_mode(swing).await
        }
    }
    .map_err(|e| CliError::from_core(e, &host))?;

    let view = StatusView::new(&name, &state);
    print_output(&render_status(&global.output, &view), global.quiet);
    Ok(())
}

fn parse_hvac_mode(input: &str) -> Result<HvacMode, CliError> {
    HvacMode::from_label(&input.to_lowercase()).map_err(|_| CliError::Validation {
        field: "mode".into(),
        reason: format!("expected auto, cool, heat, or off, got {input:?}"),
    })
}

fn parse_fan_mode(input: &str) -> Result<FanMode, CliError> {
    // Accept the pipe labels as-is, plus friendlier digit spellings.
    let lowered = input.to_lowercase();
    let label = match lowered.as_str() {
        "1" => "|",
        "2" => "||",
        "3" => "|||",
        "4" => "||||",
        "5" => "|||||",
        other => other,
    };
    FanMode::from_label(label).map_err(|_| CliError::Validation {
        field: "fan".into(),
        reason: format!("expected auto or a speed 1-5, got {input:?}"),
    })
}

fn parse_swing_mode(input: &str) -> Result<SwingMode, CliError> {
    match input.to_lowercase().as_str() {
        "on" => Ok(SwingMode::On),
        "off" => Ok(SwingMode::Off),
        _ => Err(CliError::Validation {
            field: "swing".into(),
            reason: format!("expected on or off, got {input:?}"),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fan_accepts_digits_and_pipes() {
        assert_eq!(parse_fan_mode("3").unwrap(), FanMode::Level3);
        assert_eq!(parse_fan_mode("|||").unwrap(), FanMode::Level3);
        assert_eq!(parse_fan_mode("auto").unwrap(), FanMode::Auto);
        assert!(parse_fan_mode("6").is_err());
    }

    #[test]
    fn mode_and_swing_are_case_insensitive() {
        assert_eq!(parse_hvac_mode("Cool").unwrap(), HvacMode::Cool);
        assert_eq!(parse_swing_mode("ON").unwrap(), SwingMode::On);
        assert!(parse_hvac_mode("dry").is_err());
    }
}
