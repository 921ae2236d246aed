//! src/main.rs
//!
//! Entrypoint: parse options, route logs to a file, hand over to `app::run()`.

mod app;
mod cli;
mod graph;
mod net;
mod panels;
mod settings;
mod ui;

use std::fs::OpenOptions;

use clap::Parser;
use color_eyre::eyre::WrapErr;

fn init_logging(args: &cli::Args) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .wrap_err_with(|| format!("cannot open log file {}", args.log_file.display()))?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    init_logging(&args)?;
    app::run(args)
}
