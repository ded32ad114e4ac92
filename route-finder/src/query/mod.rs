//! Query façade for the command loop.
//!
//! Four operations are offered: city lookup, shortest route, road insertion
//! and road removal. Each validates its codes against the network and
//! produces either a displayable result or a `QueryError` whose message is
//! shown to the user verbatim.

mod command;
mod error;
mod finder;

pub use command::{Command, CommandKind};
pub use error::QueryError;
pub use finder::{Reply, RoadChange, RouteFinder, RouteSummary};
