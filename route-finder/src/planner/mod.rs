//! Shortest-path route planner.
//!
//! This module answers: "what is the shortest way to drive from this city
//! to that one over the current road network?"
//!
//! The planner only ever borrows the network. All search state (distances,
//! predecessors, the frontier) lives for a single query and is dropped
//! afterwards, so mutations between queries are always observed.

mod dijkstra;


pub use dijkstra::{PathError, Route, ShortestPathTree, shortest_path, single_source};
