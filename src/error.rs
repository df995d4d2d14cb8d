use std::io::ErrorKind;

use thiserror::Error;

/// Errors raised while loading a city map.
/// Line numbers are 1-based and count every physical line of the input.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MapError {
    #[error("Map file not found")]
    NotFound,
    #[error("Map I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Invalid format on line {line}: expected 'CityA-CityB,Distance'")]
    InvalidFormat { line: usize },
    #[error("Invalid distance on line {line}: '{value}' is not a positive number")]
    InvalidDistance { line: usize, value: String },
    #[error("Invalid cities format on line {line}: expected 'CityA-CityB'")]
    InvalidCities { line: usize },
    #[error("Empty city name on line {line}")]
    EmptyCityName { line: usize },
    #[error("Self-loop detected on line {line}: {city} to {city}")]
    SelfLoop { line: usize, city: String },
    #[error("Map is empty or contains no valid connections")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum TravelerError {
    #[error("Traveler name cannot be empty")]
    EmptyName,
    #[error("City name cannot be empty")]
    EmptyCityName,
    #[error("Travel data file doesn't exist")]
    NotFound,
    #[error("Travel data I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Invalid travel data")]
    InvalidData,
}

impl From<std::io::Error> for MapError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            ErrorKind::NotFound => Self::NotFound,
            kind => Self::IO(kind),
        }
    }
}

impl From<std::io::Error> for TravelerError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            ErrorKind::NotFound => Self::NotFound,
            kind => Self::IO(kind),
        }
    }
}

impl From<serde_json::Error> for TravelerError {
    fn from(_: serde_json::Error) -> Self {
        Self::InvalidData
    }
}
