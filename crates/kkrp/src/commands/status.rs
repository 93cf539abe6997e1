//! `kkrp status` -- one poll, one rendered state.

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{StatusView, print_output, render_status};

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let (name, mut controller) = super::controller_for(global)?;
    let host = controller.host().to_owned();

    let state = controller
        .poll()
        .await
        .map_err(|e| CliError::from_core(e, &host))?;

    let view = StatusView::new(&name, &state);
    print_output(&render_status(&global.output, &view), global.quiet);
    Ok(())
}
