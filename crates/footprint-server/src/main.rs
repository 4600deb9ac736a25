//! Household Carbon Footprint Calculator
//!
//! Serves the footprint form and the `/calcular_pegada` REST endpoint.
//!
//! Run with: cargo run -p footprint-server
//! Then open: http://localhost:5000

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use footprint_config::{ConfigError, ServerConfig};
use footprint_server::{console, server};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "footprint-server", version, about)]
struct Args {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(short, long, default_value = "footprint.toml")]
    config: PathBuf,

    /// Interface to bind, overriding the file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let (mut config, from_file) = match ServerConfig::load(&args.config) {
        Ok(config) => (config, true),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            (ServerConfig::default(), false)
        }
        Err(e) => {
            eprintln!("{}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    if config.banner {
        console::print_banner();
    }
    console::init(&config.log_filter);

    if from_file {
        info!(path = %args.config.display(), "Configuration loaded");
    } else {
        info!(path = %args.config.display(), "No configuration file, using defaults");
    }

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
