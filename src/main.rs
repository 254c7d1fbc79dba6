//! Chore Board Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crate::components::render_notice;
use crate::config::{AppConfig, CliArgs};
use crate::context::AppContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger_options = rolling_logger::LoggerOptions {
        level: config.log_level.clone(),
        max_files: config.max_log_files,
        ..Default::default()
    };
    // Logging is best effort; the board still works without it.
    let _log_guard = match rolling_logger::init_with(&config.log_dir, "chore-board", &logger_options) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    let mut ctx = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("startup failed: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let result = app::run(&mut ctx, cli.command, &mut input, &mut stdout).await;

    let code = match result {
        Ok(output) => {
            let _ = writeln!(stdout, "{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    };

    if let Some(notice) = ctx.notices.current(Instant::now()) {
        let _ = writeln!(stdout, "{}", render_notice(notice));
    }
    code
}
