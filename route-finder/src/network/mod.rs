//! The road network: every city and road the planner can see.
//!
//! `RoadNetwork` is the single source of truth for queries. Cities are
//! indexed both by id and by code, and roads are kept as an adjacency map
//! keyed by origin, so every lookup is a hash lookup rather than a scan.

mod error;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{City, CityCode, CityId, Distance, Road};

pub use error::NetworkError;

/// An in-memory directed road network.
///
/// # Invariants
///
/// - City ids and city codes are unique.
/// - Every road references two cities in the network.
/// - At most one road exists per ordered `(from, to)` pair.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    cities: HashMap<CityId, City>,
    codes: HashMap<CityCode, CityId>,
    /// Outgoing roads keyed by origin, then destination.
    roads: HashMap<CityId, HashMap<CityId, Distance>>,
    road_count: usize,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from parsed records.
    ///
    /// Records that would break an invariant (duplicate city id or code,
    /// roads to unknown cities, a second road for the same pair) are
    /// skipped with a warning. The first occurrence wins.
    pub fn from_records(
        cities: impl IntoIterator<Item = City>,
        roads: impl IntoIterator<Item = Road>,
    ) -> Self {
        let mut network = Self::new();

        for city in cities {
            if let Err(e) = network.add_city(city) {
                warn!(error = %e, "Skipping city record");
            }
        }

        for road in roads {
            if let Err(e) = network.add_road(road.from, road.to, road.distance) {
                warn!(error = %e, "Skipping road record");
            }
        }

        network
    }

    /// Add a city.
    ///
    /// The network is unchanged if the id or code is already taken.
    pub fn add_city(&mut self, city: City) -> Result<CityId, NetworkError> {
        if self.cities.contains_key(&city.id) {
            return Err(NetworkError::DuplicateCityId(city.id));
        }
        if self.codes.contains_key(&city.code) {
            return Err(NetworkError::DuplicateCityCode(city.code));
        }

        let id = city.id;
        self.codes.insert(city.code.clone(), id);
        self.cities.insert(id, city);
        Ok(id)
    }

    /// Add a road between two cities by id.
    pub fn add_road(
        &mut self,
        from: CityId,
        to: CityId,
        distance: Distance,
    ) -> Result<(), NetworkError> {
        for id in [from, to] {
            if !self.cities.contains_key(&id) {
                return Err(NetworkError::UnknownCityId(id));
            }
        }

        let outgoing = self.roads.entry(from).or_default();
        if outgoing.contains_key(&to) {
            return Err(NetworkError::RoadExists { from, to });
        }

        outgoing.insert(to, distance);
        self.road_count += 1;
        Ok(())
    }

    /// Resolve a city code to its id.
    pub fn resolve_code(&self, code: &str) -> Result<CityId, NetworkError> {
        self.codes
            .get(code)
            .copied()
            .ok_or_else(|| NetworkError::UnknownCity(code.to_string()))
    }

    /// Get a city by id.
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    /// Get the full record for a city code.
    pub fn city_info(&self, code: &str) -> Result<&City, NetworkError> {
        let id = self.resolve_code(code)?;
        self.city(id).ok_or(NetworkError::UnknownCityId(id))
    }

    /// Get a city's display name.
    pub fn node_name(&self, id: CityId) -> Result<&str, NetworkError> {
        self.city(id)
            .map(|c| c.name.as_str())
            .ok_or(NetworkError::UnknownCityId(id))
    }

    /// Get a city's code.
    pub fn node_code(&self, id: CityId) -> Result<&CityCode, NetworkError> {
        self.city(id)
            .map(|c| &c.code)
            .ok_or(NetworkError::UnknownCityId(id))
    }

    /// Returns true if a city with this id exists.
    pub fn contains(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    /// Get the distance of the road from `from` to `to`, if there is one.
    pub fn road(&self, from: CityId, to: CityId) -> Option<Distance> {
        self.roads.get(&from).and_then(|out| out.get(&to)).copied()
    }

    /// Iterate the roads leaving a city as `(to, distance)` pairs.
    ///
    /// Order is unspecified. Unknown ids yield nothing.
    pub fn outgoing_edges(&self, id: CityId) -> impl Iterator<Item = (CityId, Distance)> + '_ {
        self.roads
            .get(&id)
            .into_iter()
            .flat_map(|out| out.iter().map(|(to, d)| (*to, *d)))
    }

    /// Insert a road between two cities given by code.
    ///
    /// The origin code is resolved first, so it is the one reported when
    /// both codes are unknown. A road in the opposite direction does not
    /// block insertion.
    pub fn insert_road(
        &mut self,
        from_code: &str,
        to_code: &str,
        distance: Distance,
    ) -> Result<Road, NetworkError> {
        let from = self.resolve_code(from_code)?;
        let to = self.resolve_code(to_code)?;
        self.add_road(from, to, distance)?;

        debug!(from = from_code, to = to_code, distance, "Inserted road");
        Ok(Road::new(from, to, distance))
    }

    /// Remove the road between two cities given by code.
    ///
    /// Returns the removed road.
    pub fn remove_road(&mut self, from_code: &str, to_code: &str) -> Result<Road, NetworkError> {
        let from = self.resolve_code(from_code)?;
        let to = self.resolve_code(to_code)?;

        let outgoing = self
            .roads
            .get_mut(&from)
            .ok_or(NetworkError::RoadNotFound { from, to })?;
        let distance = outgoing
            .remove(&to)
            .ok_or(NetworkError::RoadNotFound { from, to })?;
        if outgoing.is_empty() {
            self.roads.remove(&from);
        }
        self.road_count -= 1;

        debug!(from = from_code, to = to_code, distance, "Removed road");
        Ok(Road::new(from, to, distance))
    }

    /// All cities, ordered by ascending id.
    pub fn cities(&self) -> Vec<&City> {
        let mut cities: Vec<&City> = self.cities.values().collect();
        cities.sort_unstable_by_key(|c| c.id);
        cities
    }

    /// Returns the number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of roads.
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Returns true if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn city(id: u32, code: &str, name: &str) -> City {
        City::new(CityId(id), CityCode::parse(code).unwrap(), name, 0, 0)
    }

    fn record(id: u32, code: &str, name: &str, population: i64, elevation: i64) -> City {
        City {
            population,
            elevation,
            ..city(id, code, name)
        }
    }

    /// The three-city network used throughout the tests:
    /// NYC -200-> BOS -300-> PHI.
    pub fn east_coast() -> RoadNetwork {
        RoadNetwork::from_records(
            [
                record(1, "NYC", "New York", 1000, 10),
                record(2, "BOS", "Boston", 500, 20),
                record(3, "PHI", "Philadelphia", 600, 5),
            ],
            [
                Road::new(CityId(1), CityId(2), 200),
                Road::new(CityId(2), CityId(3), 300),
            ],
        )
    }
}
