//! `kkrp watch` -- poll the unit on an interval.
//!
//! Transient failures are logged and the loop keeps going; the unit's
//! little web server drops requests now and then and that should not end
//! a long-running watch.

use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

use crate::cli::{GlobalOpts, OutputFormat, WatchArgs};
use crate::error::CliError;
use crate::output::{StatusView, colored_mode, print_output, render_json_compact, render_status};

pub async fn handle(args: &WatchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if args.interval.is_zero() {
        return Err(CliError::Validation {
            field: "interval".into(),
            reason: "must be longer than zero".into(),
        });
    }

    let (name, mut controller) = super::controller_for(global)?;
    let host = controller.host().to_owned();

    let mut ticker = time::interval(args.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut polls: u64 = 0;
    loop {
        ticker.tick().await;

        match controller.poll().await {
            Ok(state) => {
                let view = StatusView::new(&name, &state);
                let line = match global.output {
                    // Interactive watch gets a compact line per poll
                    // rather than a full table every time.
                    OutputFormat::Table => format!(
                        "{name} {} target {} current {} fan {} swing {}",
                        colored_mode(state.hvac_mode),
                        view.target,
                        view.current,
                        view.fan,
                        view.swing
                    ),
                    OutputFormat::Json | OutputFormat::JsonCompact => render_json_compact(&view),
                    OutputFormat::Plain => render_status(&OutputFormat::Plain, &view),
                };
                print_output(&line, global.quiet);
            }
            Err(err) => {
                warn!(host = %host, "poll failed: {}", CliError::from_core(err, &host));
            }
        }

        polls += 1;
        if let Some(count) = args.count {
            if polls >= count {
                break;
            }
        }
    }
    Ok(())
}
