mod cli_model;
mod config;

pub use config::{ConvertConfig, InputSource, QcConfig};

use crate::log_utils::init_log;

/// Sub-command selected on the command line together with its configuration
pub enum Task {
    Convert(ConvertConfig),
    DiffMiss(QcConfig),
}

pub fn handle_cli() -> anyhow::Result<Task> {
    let m = cli_model::cli_model().get_matches();
    init_log(&m)?;

    match m.subcommand() {
        Some(("convert", sm)) => Ok(Task::Convert(ConvertConfig::from_matches(sm)?)),
        Some(("diffmiss", sm)) => Ok(Task::DiffMiss(QcConfig::from_matches(sm)?)),
        Some((s, _)) => Err(anyhow!("Unknown command {}", s)),
        None => Err(anyhow!("No command given")),
    }
}
