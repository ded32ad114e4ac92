//! Road network route finder.
//!
//! Loads cities and directed roads from two data files and answers
//! interactive queries: look up a city, find the shortest route between
//! two cities, and insert or remove roads between queries.

pub mod config;
pub mod domain;
pub mod dto;
pub mod loader;
pub mod network;
pub mod planner;
pub mod query;
pub mod repl;
