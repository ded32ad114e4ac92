//! Runtime configuration for the route finder binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Environment variable selecting the reply format.
pub const FORMAT_ENV: &str = "ROUTE_FINDER_FORMAT";

/// How replies are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The plain sentence for each reply.
    #[default]
    Text,
    /// One JSON object per reply.
    Json,
}

/// Configuration for a route finder session.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "route-finder")]
#[command(about = "Shortest routes over a road network loaded from city and road files")]
pub struct Config {
    /// Path to the city data file.
    #[arg(default_value = "City.dat")]
    pub city_file: PathBuf,

    /// Path to the road data file.
    #[arg(default_value = "Road.dat")]
    pub road_file: PathBuf,

    /// Reply format.
    #[arg(
        long,
        env = FORMAT_ENV,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,
}
