#![doc = include_str!("../README.md")]

mod error;
mod format;
mod graph;
mod journal;
mod model;
mod routing;
mod traveler;

pub use error::{MapError, TravelerError};
pub use format::{deserialize_traveler, parse_city_map, serialize_traveler};
pub use graph::CityGraph;
pub use journal::TravelLog;
pub use model::{CityId, Distance};
pub use routing::{Path, ShortestPathConfig, TieBreak, shortest_path};
pub use traveler::Traveler;
