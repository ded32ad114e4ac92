//! The route finder: the four operations offered to the command loop.

use std::fmt;

use crate::domain::{City, CityCode, CityId, Distance};
use crate::network::{NetworkError, RoadNetwork};
use crate::planner::{self, PathError};

use super::{Command, QueryError};

/// A shortest route, resolved to names and codes for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Total distance along the route.
    pub distance: u64,
    /// Name of the origin city.
    pub from_name: String,
    /// Name of the destination city.
    pub to_name: String,
    /// Codes of every city on the route, origin first.
    pub codes: Vec<CityCode>,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.codes.iter().map(CityCode::as_str).collect();
        write!(
            f,
            "The minimum distance between {} and {} is {} through the route: {}.",
            self.from_name,
            self.to_name,
            self.distance,
            codes.join(", ")
        )
    }
}

/// A road that was inserted or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadChange {
    pub from: CityCode,
    pub to: CityCode,
    pub from_name: String,
    pub to_name: String,
    pub distance: Distance,
}

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    City(City),
    Route(RouteSummary),
    RoadInserted(RoadChange),
    RoadRemoved(RoadChange),
    Error(QueryError),
}

impl Reply {
    /// Returns true if the command failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::City(city) => write!(f, "{city}"),
            Reply::Route(summary) => write!(f, "{summary}"),
            Reply::RoadInserted(change) => write!(
                f,
                "You have inserted a road from {} to {} with a distance of {}.",
                change.from_name, change.to_name, change.distance
            ),
            Reply::RoadRemoved(change) => write!(
                f,
                "You have removed the road from {} to {}.",
                change.from_name, change.to_name
            ),
            Reply::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Answers queries against an owned road network.
///
/// Every query is a stateless request against the current network; inserts
/// and removals are visible to the very next route query.
#[derive(Debug, Clone)]
pub struct RouteFinder {
    network: RoadNetwork,
}

impl RouteFinder {
    /// Create a route finder over a network.
    pub fn new(network: RoadNetwork) -> Self {
        Self { network }
    }

    /// Read access to the underlying network.
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Look up a city by code.
    pub fn lookup_city(&self, code: &str) -> Result<&City, QueryError> {
        self.network
            .city_info(code)
            .map_err(|e| self.describe(e))
    }

    /// Find the shortest route between two cities given by code.
    ///
    /// The origin code is checked first, so it is the one reported when
    /// both are unknown.
    pub fn route(&self, from_code: &str, to_code: &str) -> Result<RouteSummary, QueryError> {
        let from = self.resolve(from_code)?;
        let to = self.resolve(to_code)?;

        let route = planner::shortest_path(&self.network, from, to).map_err(|e| match e {
            PathError::Unreachable { from, to } => QueryError::Unreachable {
                from: self.name(from),
                to: self.name(to),
            },
            PathError::UnknownCity(id) => QueryError::Network(NetworkError::UnknownCityId(id)),
        })?;

        let codes = route
            .path
            .iter()
            .map(|id| self.network.node_code(*id).cloned())
            .collect::<Result<Vec<_>, _>>()
            .map_err(QueryError::Network)?;

        Ok(RouteSummary {
            distance: route.distance,
            from_name: self.name(from),
            to_name: self.name(to),
            codes,
        })
    }

    /// Insert a road between two cities given by code.
    pub fn insert_road(
        &mut self,
        from_code: &str,
        to_code: &str,
        distance: Distance,
    ) -> Result<RoadChange, QueryError> {
        match self.network.insert_road(from_code, to_code, distance) {
            Ok(road) => self.change(road.from, road.to, road.distance),
            Err(e) => Err(self.describe(e)),
        }
    }

    /// Remove the road between two cities given by code.
    pub fn remove_road(
        &mut self,
        from_code: &str,
        to_code: &str,
    ) -> Result<RoadChange, QueryError> {
        match self.network.remove_road(from_code, to_code) {
            Ok(road) => self.change(road.from, road.to, road.distance),
            Err(e) => Err(self.describe(e)),
        }
    }

    /// Run a parsed command. Failures become `Reply::Error`.
    pub fn execute(&mut self, command: &Command) -> Reply {
        let result = match command {
            Command::Lookup { code } => self.lookup_city(code).cloned().map(Reply::City),
            Command::Route { from, to } => self.route(from, to).map(Reply::Route),
            Command::Insert { from, to, distance } => self
                .insert_road(from, to, *distance)
                .map(Reply::RoadInserted),
            Command::Remove { from, to } => self.remove_road(from, to).map(Reply::RoadRemoved),
        };

        result.unwrap_or_else(Reply::Error)
    }

    fn resolve(&self, code: &str) -> Result<CityId, QueryError> {
        self.network
            .resolve_code(code)
            .map_err(|e| self.describe(e))
    }

    /// City name for messages. Ids here always come from the network itself.
    fn name(&self, id: CityId) -> String {
        self.network
            .node_name(id)
            .map(str::to_string)
            .unwrap_or_else(|_| id.to_string())
    }

    fn change(
        &self,
        from: CityId,
        to: CityId,
        distance: Distance,
    ) -> Result<RoadChange, QueryError> {
        let code = |id| {
            self.network
                .node_code(id)
                .cloned()
                .map_err(QueryError::Network)
        };

        Ok(RoadChange {
            from: code(from)?,
            to: code(to)?,
            from_name: self.name(from),
            to_name: self.name(to),
            distance,
        })
    }

    /// Turn a network error into the message the user sees.
    fn describe(&self, err: NetworkError) -> QueryError {
        match err {
            NetworkError::UnknownCity(code) => QueryError::UnknownCity(code),
            NetworkError::RoadExists { from, to } => QueryError::DuplicateRoad {
                from: self.name(from),
                to: self.name(to),
            },
            NetworkError::RoadNotFound { from, to } => QueryError::RoadNotFound {
                from: self.name(from),
                to: self.name(to),
            },
            other => QueryError::Network(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_support::east_coast;
    use crate::query::CommandKind;

    fn finder() -> RouteFinder {
        RouteFinder::new(east_coast())
    }

    fn codes(summary: &RouteSummary) -> Vec<&str> {
        summary.codes.iter().map(CityCode::as_str).collect()
    }

    #[test]
    fn lookup_known_city() {
        let finder = finder();
        let city = finder.lookup_city("NYC").unwrap();
        assert_eq!(city.name, "New York");
        assert_eq!(city.to_string(), "1 NYC New York 1000 10");
    }

    #[test]
    fn lookup_unknown_city() {
        let finder = finder();
        let err = finder.lookup_city("XYZ").unwrap_err();
        assert_eq!(err, QueryError::UnknownCity("XYZ".into()));
        assert_eq!(err.to_string(), "City code XYZ doesn't exist.");
    }

    #[test]
    fn route_summary_message() {
        let finder = finder();
        let summary = finder.route("NYC", "PHI").unwrap();
        assert_eq!(summary.distance, 500);
        assert_eq!(codes(&summary), vec!["NYC", "BOS", "PHI"]);
        assert_eq!(
            summary.to_string(),
            "The minimum distance between New York and Philadelphia is 500 \
             through the route: NYC, BOS, PHI."
        );
    }

    #[test]
    fn route_to_self_message() {
        let finder = finder();
        let summary = finder.route("BOS", "BOS").unwrap();
        assert_eq!(
            summary.to_string(),
            "The minimum distance between Boston and Boston is 0 through the route: BOS."
        );
    }

    #[test]
    fn route_reports_which_code_is_missing() {
        let finder = finder();
        assert_eq!(
            finder.route("XYZ", "PHI"),
            Err(QueryError::UnknownCity("XYZ".into()))
        );
        assert_eq!(
            finder.route("NYC", "ABC"),
            Err(QueryError::UnknownCity("ABC".into()))
        );
        assert_eq!(
            finder.route("XYZ", "ABC"),
            Err(QueryError::UnknownCity("XYZ".into()))
        );
    }

    #[test]
    fn route_unreachable() {
        let finder = finder();
        let err = finder.route("PHI", "NYC").unwrap_err();
        assert_eq!(
            err,
            QueryError::Unreachable {
                from: "Philadelphia".into(),
                to: "New York".into()
            }
        );
    }

    #[test]
    fn insert_and_remove_scenario() {
        let mut finder = finder();

        let change = finder.insert_road("NYC", "PHI", 100).unwrap();
        assert_eq!(change.from.as_str(), "NYC");
        assert_eq!(change.to.as_str(), "PHI");
        assert_eq!(
            Reply::RoadInserted(change).to_string(),
            "You have inserted a road from New York to Philadelphia with a distance of 100."
        );

        let summary = finder.route("NYC", "PHI").unwrap();
        assert_eq!(summary.distance, 100);
        assert_eq!(codes(&summary), vec!["NYC", "PHI"]);

        let change = finder.remove_road("NYC", "PHI").unwrap();
        assert_eq!(change.distance, 100);
        assert_eq!(
            Reply::RoadRemoved(change).to_string(),
            "You have removed the road from New York to Philadelphia."
        );

        let summary = finder.route("NYC", "PHI").unwrap();
        assert_eq!(summary.distance, 500);
        assert_eq!(codes(&summary), vec!["NYC", "BOS", "PHI"]);
    }

    #[test]
    fn insert_duplicate_road() {
        let mut finder = finder();
        let err = finder.insert_road("NYC", "BOS", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The road between New York and Boston already exists."
        );
    }

    #[test]
    fn insert_unknown_city() {
        let mut finder = finder();
        assert_eq!(
            finder.insert_road("NYC", "XYZ", 1),
            Err(QueryError::UnknownCity("XYZ".into()))
        );
    }

    #[test]
    fn remove_twice() {
        let mut finder = finder();
        finder.insert_road("NYC", "PHI", 100).unwrap();
        finder.remove_road("NYC", "PHI").unwrap();

        let err = finder.remove_road("NYC", "PHI").unwrap_err();
        assert_eq!(
            err,
            QueryError::RoadNotFound {
                from: "New York".into(),
                to: "Philadelphia".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "The road between New York and Philadelphia doesn't exist."
        );
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut finder = finder();

        let reply = finder.execute(&Command::parse(CommandKind::Lookup, "BOS").unwrap());
        assert_eq!(reply.to_string(), "2 BOS Boston 500 20");
        assert!(!reply.is_error());

        let reply = finder.execute(&Command::parse(CommandKind::Insert, "PHI NYC 700").unwrap());
        assert!(matches!(reply, Reply::RoadInserted(_)));
        assert_eq!(finder.network().road_count(), 3);

        let reply = finder.execute(&Command::parse(CommandKind::Route, "BOS NYC").unwrap());
        assert_eq!(
            reply.to_string(),
            "The minimum distance between Boston and New York is 1000 \
             through the route: BOS, PHI, NYC."
        );

        let reply = finder.execute(&Command::parse(CommandKind::Remove, "BOS NYC").unwrap());
        assert!(reply.is_error());
        assert_eq!(
            reply.to_string(),
            "The road between Boston and New York doesn't exist."
        );
    }
}
