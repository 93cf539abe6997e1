//! `kkrp config` -- inspect and bootstrap the config file.

use kkrp_config::{Config, Profile, config_path, load_config, save_config};

use crate::cli::{ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{print_output, render_json_compact, render_json_pretty};

pub fn handle(command: &ConfigCommand, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        ConfigCommand::Path => {
            print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }
        ConfigCommand::Show => show(global),
        ConfigCommand::Init => init(global),
    }
}

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let config = load_config()?;
    let rendered = match global.output {
        OutputFormat::Json => render_json_pretty(&config),
        OutputFormat::JsonCompact => render_json_compact(&config),
        OutputFormat::Table | OutputFormat::Plain => {
            toml::to_string_pretty(&config).map_err(|e| CliError::Config {
                message: e.to_string(),
            })?
        }
    };
    print_output(rendered.trim_end(), global.quiet);
    Ok(())
}

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let path = config_path();
    if path.exists() {
        return Err(CliError::Config {
            message: format!("config already exists at {}", path.display()),
        });
    }

    let mut config = Config {
        default_device: Some("living-room".into()),
        ..Config::default()
    };
    config.devices.insert(
        "living-room".into(),
        Profile {
            host: global.host.clone().unwrap_or_else(|| "192.168.1.40".into()),
            name: Some("Living room AC".into()),
            timeout: None,
            target_temp_step: None,
            uid: 0,
        },
    );

    save_config(&config)?;
    print_output(&format!("wrote {}", path.display()), global.quiet);
    Ok(())
}
