mod api;
mod config;
mod mapper;
mod render;
mod runner;
mod web;

use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;

use crate::api::ApiClient;
use crate::config::Config;
use crate::runner::{Observer, Runner};
use crate::web::MapWindow;

#[derive(Parser)]
#[command(name = "iss-o-mat")]
#[command(about = "Where is the International Space Station right now?")]
struct Cli {
    /// YAML configuration file; built-in defaults are used without one
    #[arg(short, long)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the crew and ISS position, then show the map (default)
    Map,
    /// Print the crew, ISS position and next pass without a map
    Report,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command.unwrap_or(Commands::Map) {
        Commands::Map => run(&config, false),
        Commands::Report => run(&config, true),
    }
}

fn run(config: &Config, text_only: bool) -> ExitCode {
    let observer = match config.observer.position() {
        Ok(position) => Observer {
            name: config.observer.name.clone(),
            position,
            color: config.observer.color,
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match ApiClient::new(&config.api.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using API at {}", client.url());

    let mut runner = Runner {
        source: &client,
        observer,
        icon: config.assets.icon.clone(),
        out: io::stdout().lock(),
    };

    let result = if text_only {
        runner.run_report()
    } else {
        runner.run_map(|| {
            MapWindow::open(
                config.canvas.width,
                config.canvas.height,
                &config.assets.map,
                &config.web.bind,
            )
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
