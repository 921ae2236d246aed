//! src/cli.rs
//!
//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

/// The sensor's access point serves `/data` here.
pub const DEFAULT_ENDPOINT: &str = "http://192.168.4.1/data";

#[derive(Debug, Parser)]
#[command(name = "flow-monitor", version, about = "Live optical-flow sensor dashboard")]
pub struct Args {
    /// Sensor data endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Settings file (poll interval and chart points)
    #[arg(long, default_value = "flow-monitor.json")]
    pub settings: PathBuf,

    /// Use a simulated sensor instead of the endpoint
    #[arg(long)]
    pub simulate: bool,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 2_000)]
    pub timeout_ms: u64,

    /// Log file; the terminal is taken by the UI
    #[arg(long, default_value = "flow-monitor.log")]
    pub log_file: PathBuf,
}
