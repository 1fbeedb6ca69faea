use std::env;
use std::process;

use clap::Parser;

use crate::cli::Args;

mod cli;
mod config;
mod joystick;

fn main() {
    let log_level = match env::var("LOG_LEVEL") {
        Ok(value) => value,
        Err(_) => "warn".to_string(),
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    log::debug!("Starting joyscope v{}", VERSION);

    let args = Args::parse();
    if let Err(e) = cli::main_cli(args) {
        log::error!("{e}");
        process::exit(1);
    }
}
