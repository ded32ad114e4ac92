//! City and road data files.
//!
//! Both files are plain text with one whitespace-separated record per line:
//!
//! - cities: `number code name... population elevation`, where the name may
//!   span several tokens
//! - roads: `from to distance`, all integers, `from`/`to` being city numbers
//!
//! Lines that do not fit the format, including lines that are not valid
//! UTF-8, are skipped with a warning rather than failing the whole load.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{City, CityCode, CityId, Distance, Road};
use crate::network::RoadNetwork;

pub use error::LoadError;

/// Parse one line of the city file.
///
/// Returns `None` for lines with fewer than five tokens or with fields
/// that do not parse.
///
/// # Examples
///
/// ```
/// use route_finder::loader::parse_city_line;
///
/// let city = parse_city_line("1 NYC New York 1000 10").unwrap();
/// assert_eq!(city.name, "New York");
/// assert_eq!(city.population, 1000);
///
/// assert!(parse_city_line("1 NYC 1000 10").is_none());
/// ```
pub fn parse_city_line(line: &str) -> Option<City> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 5 {
        return None;
    }

    let n = tokens.len();
    let id = tokens[0].parse::<u32>().ok()?;
    let code = CityCode::parse(tokens[1]).ok()?;
    let name = tokens[2..n - 2].join(" ");
    let population = tokens[n - 2].parse::<i64>().ok()?;
    let elevation = tokens[n - 1].parse::<i64>().ok()?;

    Some(City::new(CityId(id), code, name, population, elevation))
}

/// Parse one line of the road file.
///
/// Returns `None` unless the line is exactly three integer tokens with a
/// non-negative distance.
pub fn parse_road_line(line: &str) -> Option<Road> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [from, to, distance] = tokens.as_slice() else {
        return None;
    };

    let from = from.parse::<u32>().ok()?;
    let to = to.parse::<u32>().ok()?;
    let distance = distance.parse::<Distance>().ok()?;

    Some(Road::new(CityId(from), CityId(to), distance))
}

/// Read city records from a reader, skipping malformed lines.
pub fn read_cities<R: BufRead>(reader: R, source: &Path) -> Result<Vec<City>, LoadError> {
    read_records(reader, source, "city", parse_city_line)
}

/// Read road records from a reader, skipping malformed lines.
pub fn read_roads<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Road>, LoadError> {
    read_records(reader, source, "road", parse_road_line)
}

fn read_records<R, T>(
    reader: R,
    source: &Path,
    kind: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, LoadError>
where
    R: BufRead,
{
    let mut records = Vec::new();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.map_err(|e| LoadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

        let line = std::str::from_utf8(&bytes).ok();
        if line.is_some_and(|l| l.trim().is_empty()) {
            continue;
        }

        match line.and_then(&parse) {
            Some(record) => records.push(record),
            None => warn!(
                file = %source.display(),
                line = idx + 1,
                kind,
                "Skipping malformed record"
            ),
        }
    }

    Ok(records)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Load a road network from a city file and a road file.
///
/// Fails only if a file cannot be read. Bad records are skipped.
pub fn load_network(city_path: &Path, road_path: &Path) -> Result<RoadNetwork, LoadError> {
    let cities = read_cities(open(city_path)?, city_path)?;
    let roads = read_roads(open(road_path)?, road_path)?;

    let city_records = cities.len();
    let road_records = roads.len();
    let network = RoadNetwork::from_records(cities, roads);

    info!(
        cities = network.city_count(),
        roads = network.road_count(),
        skipped_cities = city_records - network.city_count(),
        skipped_roads = road_records - network.road_count(),
        "Loaded road network"
    );
    for city in network.cities() {
        debug!(%city, "Loaded city");
    }

    Ok(network)
}
