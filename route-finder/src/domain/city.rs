//! City identifiers and records.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid city code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city code: {reason}")]
pub struct InvalidCityCode {
    reason: &'static str,
}

/// Numeric city identifier, taken from the first field of a city record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short city code such as `NYC`, the external key for every command.
///
/// Codes are non-empty and contain no whitespace, so a code always survives
/// being split out of a command line. Matching is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use route_finder::domain::CityCode;
///
/// let nyc = CityCode::parse("NYC").unwrap();
/// assert_eq!(nyc.as_str(), "NYC");
///
/// assert!(CityCode::parse("").is_err());
/// assert!(CityCode::parse("NY C").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CityCode(String);

impl CityCode {
    /// Parse a city code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCityCode> {
        if s.is_empty() {
            return Err(InvalidCityCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidCityCode {
                reason: "must not contain whitespace",
            });
        }

        Ok(CityCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CityCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityCode({})", self.0)
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A city in the road network.
///
/// Population and elevation are descriptive only; routing never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: CityId,
    pub code: CityCode,
    /// Display name, may contain spaces.
    pub name: String,
    pub population: i64,
    pub elevation: i64,
}

impl City {
    /// Creates a new city record.
    pub fn new(
        id: CityId,
        code: CityCode,
        name: impl Into<String>,
        population: i64,
        elevation: i64,
    ) -> Self {
        Self {
            id,
            code,
            name: name.into(),
            population,
            elevation,
        }
    }
}

/// Renders the record in the same field order as the city data file.
impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id, self.code, self.name, self.population, self.elevation
        )
    }
}
