use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use route_finder::config::Config;
use route_finder::loader::load_network;
use route_finder::query::RouteFinder;
use route_finder::repl::Repl;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with replies on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let network = match load_network(&config.city_file, &config.road_file) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if network.is_empty() {
        eprintln!(
            "Warning: no cities loaded from {}",
            config.city_file.display()
        );
    }

    let finder = RouteFinder::new(network);
    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock(), finder, config.format);

    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
