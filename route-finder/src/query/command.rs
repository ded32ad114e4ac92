//! Parsed commands.

use crate::domain::Distance;

use super::QueryError;

/// Which operation a command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Lookup,
    Route,
    Insert,
    Remove,
}

/// A fully parsed query, ready for the façade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the record for one city.
    Lookup { code: String },

    /// Find the shortest route between two cities.
    Route { from: String, to: String },

    /// Add a road.
    Insert {
        from: String,
        to: String,
        distance: Distance,
    },

    /// Remove a road.
    Remove { from: String, to: String },
}

impl Command {
    /// Parse the arguments of a command of the given kind.
    ///
    /// Arguments are split on whitespace. The token count must match the
    /// command exactly, and an insert distance must be a non-negative
    /// integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_finder::query::{Command, CommandKind};
    ///
    /// let cmd = Command::parse(CommandKind::Insert, "NYC PHI 100").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::Insert { from: "NYC".into(), to: "PHI".into(), distance: 100 }
    /// );
    ///
    /// assert!(Command::parse(CommandKind::Route, "NYC").is_err());
    /// assert!(Command::parse(CommandKind::Insert, "NYC PHI -5").is_err());
    /// ```
    pub fn parse(kind: CommandKind, args: &str) -> Result<Self, QueryError> {
        let tokens: Vec<&str> = args.split_whitespace().collect();

        match (kind, tokens.as_slice()) {
            (CommandKind::Lookup, [code]) => Ok(Command::Lookup {
                code: code.to_string(),
            }),
            (CommandKind::Route, [from, to]) => Ok(Command::Route {
                from: from.to_string(),
                to: to.to_string(),
            }),
            (CommandKind::Insert, [from, to, distance]) => {
                let distance = distance
                    .parse::<Distance>()
                    .map_err(|_| QueryError::MalformedInput)?;
                Ok(Command::Insert {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
            }
            (CommandKind::Remove, [from, to]) => Ok(Command::Remove {
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err(QueryError::MalformedInput),
        }
    }
}
