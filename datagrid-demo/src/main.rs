//! Terminal demo for the `datagrid` components.
//!
//! Two pages: a form built from text inputs with validation, and a sortable,
//! selectable data table. Configuration comes from `DATAGRID_*` environment
//! variables; logs go to the platform cache directory.

mod app;
mod config;
mod error;
mod pages;
mod paths;

use std::fs::{self, File};
use std::process::ExitCode;

use datagrid::Terminal;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::DemoError;

fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    let Some(log_path) = paths::log_file() else {
        // No home directory to log into; run without a logger.
        return Ok(());
    };
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();

    let log_file = File::create(&log_path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    log::debug!("logging to {}", log_path.display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from_env()?;
    init_logging(&config)?;

    let mut app = App::new(&config);
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
