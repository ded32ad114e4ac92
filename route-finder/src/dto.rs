//! Serializable reply objects for JSON output.

use serde::Serialize;

use crate::domain::City;
use crate::query::{Reply, RoadChange};

/// A reply, tagged by kind.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyDto {
    City(City),
    Route(RouteResult),
    RoadInserted(RoadResult),
    RoadRemoved(RoadResult),
    Error(ErrorResult),
}

/// A shortest route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Total distance
    pub distance: u64,

    /// Origin city name
    pub from: String,

    /// Destination city name
    pub to: String,

    /// City codes along the route, origin first
    pub route: Vec<String>,

    /// Human-readable summary
    pub message: String,
}

/// A road that was inserted or removed.
#[derive(Debug, Serialize)]
pub struct RoadResult {
    pub from: String,
    pub to: String,
    pub distance: u32,
    pub message: String,
}

/// A failed command.
#[derive(Debug, Serialize)]
pub struct ErrorResult {
    pub message: String,
}

impl RoadResult {
    fn from_change(change: &RoadChange, message: String) -> Self {
        Self {
            from: change.from.to_string(),
            to: change.to.to_string(),
            distance: change.distance,
            message,
        }
    }
}

impl From<&Reply> for ReplyDto {
    fn from(reply: &Reply) -> Self {
        let message = reply.to_string();
        match reply {
            Reply::City(city) => ReplyDto::City(city.clone()),
            Reply::Route(summary) => ReplyDto::Route(RouteResult {
                distance: summary.distance,
                from: summary.from_name.clone(),
                to: summary.to_name.clone(),
                route: summary.codes.iter().map(|c| c.to_string()).collect(),
                message,
            }),
            Reply::RoadInserted(change) => {
                ReplyDto::RoadInserted(RoadResult::from_change(change, message))
            }
            Reply::RoadRemoved(change) => {
                ReplyDto::RoadRemoved(RoadResult::from_change(change, message))
            }
            Reply::Error(_) => ReplyDto::Error(ErrorResult { message }),
        }
    }
}
