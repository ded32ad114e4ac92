//! Single-source shortest paths over the road network.
//!
//! Classic Dijkstra: repeatedly settle the unsettled city with the smallest
//! known distance, then relax the roads leaving it. The frontier is a binary
//! min-heap of `(distance, id)` with lazy deletion, so equal distances are
//! settled in ascending id order and results are reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::CityId;
use crate::network::RoadNetwork;

/// Error from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// An endpoint is not a city in the network
    #[error("unknown city id: {0}")]
    UnknownCity(CityId),

    /// No sequence of roads leads from `from` to `to`
    #[error("no route from {from} to {to}")]
    Unreachable { from: CityId, to: CityId },
}

/// A shortest route between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Sum of road distances along the path.
    pub distance: u64,
    /// Cities from source to target, both inclusive.
    pub path: Vec<CityId>,
}

impl Route {
    /// Returns the number of roads travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Distances and predecessors from one source to every reachable city.
///
/// A city with no distance entry is unreachable. There is no infinity
/// sentinel, so no real distance can be mistaken for "unreached".
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: CityId,
    dist: HashMap<CityId, u64>,
    prev: HashMap<CityId, CityId>,
}

impl ShortestPathTree {
    /// The city the tree was grown from.
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Shortest distance to `target`, or `None` if it cannot be reached.
    pub fn distance_to(&self, target: CityId) -> Option<u64> {
        self.dist.get(&target).copied()
    }

    /// The city settled immediately before `target` on its shortest path.
    pub fn predecessor(&self, target: CityId) -> Option<CityId> {
        self.prev.get(&target).copied()
    }

    /// Number of cities reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.dist.len()
    }

    /// Reconstruct the route to `target` by walking predecessors back to
    /// the source.
    pub fn path_to(&self, target: CityId) -> Result<Route, PathError> {
        let unreachable = PathError::Unreachable {
            from: self.source,
            to: target,
        };

        let distance = self.distance_to(target).ok_or_else(|| unreachable.clone())?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current).ok_or_else(|| unreachable.clone())?;
            path.push(current);
        }
        path.reverse();

        Ok(Route { distance, path })
    }
}

/// Compute shortest distances from `source` to every city.
///
/// Runs to completion over every reachable city; there is no early exit.
pub fn single_source(
    network: &RoadNetwork,
    source: CityId,
) -> Result<ShortestPathTree, PathError> {
    if !network.contains(source) {
        return Err(PathError::UnknownCity(source));
    }

    let mut dist: HashMap<CityId, u64> = HashMap::new();
    let mut prev: HashMap<CityId, CityId> = HashMap::new();
    let mut settled: HashSet<CityId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, CityId)>> = BinaryHeap::new();

    dist.insert(source, 0);
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        // Stale entry: u was settled via a shorter path already
        if !settled.insert(u) {
            continue;
        }

        trace!(city = %u, distance = d, "Settled city");

        for (v, w) in network.outgoing_edges(u) {
            if settled.contains(&v) {
                continue;
            }

            let alt = d.saturating_add(u64::from(w));
            if dist.get(&v).is_none_or(|&current| alt < current) {
                dist.insert(v, alt);
                prev.insert(v, u);
                frontier.push(Reverse((alt, v)));
            }
        }
    }

    debug!(
        source = %source,
        settled = settled.len(),
        "Shortest path tree complete"
    );

    Ok(ShortestPathTree { source, dist, prev })
}

/// Find the shortest route from `source` to `target`.
///
/// A city always reaches itself with distance 0 and a one-city path.
pub fn shortest_path(
    network: &RoadNetwork,
    source: CityId,
    target: CityId,
) -> Result<Route, PathError> {
    if !network.contains(target) {
        return Err(PathError::UnknownCity(target));
    }

    let tree = single_source(network, source)?;
    let route = tree.path_to(target);

    match &route {
        Ok(r) => debug!(
            source = %tree.source(),
            target = %target,
            distance = r.distance,
            hops = r.hops(),
            "Found route"
        ),
        Err(_) => debug!(
            source = %tree.source(),
            target = %target,
            reachable = tree.reachable_count(),
            "No route"
        ),
    }

    route
}
