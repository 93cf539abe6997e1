//! Command handlers for the `kkrp` CLI.

mod config_cmd;
mod modes;
mod set;
mod status;
mod watch;

use kkrp_core::{ClimateController, DeviceConfig};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command.
pub async fn dispatch(command: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        Command::Status => status::handle(global).await,
        Command::Watch(args) => watch::handle(&args, global).await,
        Command::Set(args) => set::handle(&args, global).await,
        Command::Modes => modes::handle(global),
        Command::Config(cmd) => config_cmd::handle(&cmd, global),
    }
}

/// Resolve the configured device and build a controller for it.
fn controller_for(global: &GlobalOpts) -> Result<(String, ClimateController), CliError> {
    let (name, device) = crate::config::resolve_device(global)?;
    let host = device.host.clone();
    let controller = controller_from(device, &host)?;
    Ok((name, controller))
}

fn controller_from(device: DeviceConfig, host: &str) -> Result<ClimateController, CliError> {
    ClimateController::new(device).map_err(|e| CliError::from_core(e, host))
}
