//! Domain types for the road network.
//!
//! Cities are the nodes of the network and roads the directed, weighted
//! edges between them. Codes are validated at construction time, so code
//! that receives a `CityCode` can trust that it is a usable key.

mod city;
mod road;

pub use city::{City, CityCode, CityId, InvalidCityCode};
pub use road::{Distance, Road};
