//! Text formats read and written by the planner.
//!
//! - Maps: one `CityA-CityB,Distance` connection per line, `#` comments and blank lines ignored.
//! - Travelers: a JSON object with `name`, `currentLocation` and `route` fields.

pub(crate) mod map;
mod traveler;

pub use map::parse_city_map;
pub use traveler::{deserialize_traveler, serialize_traveler};
