//! CLI module for pingboard
//!
//! The binary has a single job, serving the dashboard and API, so the flags
//! live on the top-level parser.

use clap::Parser;
use pingboard_common::config::ServerConfig;
use std::path::PathBuf;

/// Pingboard - probe URLs once and keep a history of the results
#[derive(Parser, Debug, Clone)]
#[command(name = "pingboard")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PINGBOARD_HOST                 Bind address (default: 0.0.0.0)
    PINGBOARD_PORT                 Listen port (default: 3000)
    PINGBOARD_DATA_FILE            History file (default: data/pings.json)
    PINGBOARD_PROBE_TIMEOUT_SECS   Outbound request timeout (default: 5)
    PINGBOARD_LOG_LEVEL            Log filter (default: info, fallback: RUST_LOG)
    PINGBOARD_LOG_DIR              Write daily-rolling log files here
"#)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "3000", env = "PINGBOARD_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "PINGBOARD_HOST")]
    pub host: String,

    /// JSON file holding the ping history
    #[arg(long, default_value = "data/pings.json", env = "PINGBOARD_DATA_FILE")]
    pub data_file: PathBuf,

    /// Seconds before an outbound probe gives up
    #[arg(
        long,
        default_value = "5",
        env = "PINGBOARD_PROBE_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub probe_timeout_secs: u64,

    /// Keep history in memory instead of the data file
    #[arg(long, default_value_t = false)]
    pub in_memory: bool,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            host: cli.host,
            port: cli.port,
            data_file: cli.data_file,
            probe_timeout_secs: cli.probe_timeout_secs,
            in_memory: cli.in_memory,
        }
    }
}
