use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::path::Path as FsPath;

use tracing::{debug, info};

use crate::{CityGraph, TravelerError, deserialize_traveler, serialize_traveler};

/// A traveler with a current location and an ordered route of city stops.
///
/// Two travelers are equal when they share name and location, regardless of their routes.
/// Cloning a traveler copies its whole route.
#[derive(Debug, Clone)]
pub struct Traveler {
    name: String,
    location: Option<String>,
    route: Vec<String>,
}

impl Traveler {
    pub fn new(name: impl Into<String>) -> Result<Self, TravelerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TravelerError::EmptyName);
        }

        Ok(Self {
            name,
            location: None,
            route: vec![],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Sets the current location, turning its first character into uppercase when it is an ASCII
    /// lowercase letter. A blank location clears it.
    pub fn set_location(&mut self, location: &str) {
        if location.trim().is_empty() {
            self.location = None;
            return;
        }

        let mut location = location.to_owned();
        if let Some(first) = location.get_mut(..1) {
            first.make_ascii_uppercase();
        }
        self.location = Some(location);
    }

    pub fn clear_location(&mut self) {
        self.location = None;
    }

    pub fn route_items(&self) -> &[String] {
        &self.route
    }

    /// Route stops joined by arrows, e.g. `Paris -> Lyon`.
    pub fn route_display(&self) -> String {
        self.route.join(" -> ")
    }

    /// Appends a stop at the end of the route.
    pub fn add_city(&mut self, city: impl Into<String>) -> Result<(), TravelerError> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(TravelerError::EmptyCityName);
        }

        self.route.push(city);
        Ok(())
    }

    /// Removes the first occurrence of the city from the route.
    /// Returns false if the route doesn't contain the city.
    pub fn remove_city(&mut self, city: &str) -> bool {
        match self.route.iter().position(|stop| stop == city) {
            Some(index) => {
                self.route.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.route.iter().any(|stop| stop == city)
    }

    /// Sorts the stops lexicographically. The sorted route is not necessarily a walk on any map.
    pub fn sort_route(&mut self) {
        self.route.sort();
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    pub fn next_stop(&self) -> Option<&str> {
        self.route.first().map(String::as_str)
    }

    pub fn stop_count(&self) -> usize {
        self.route.len()
    }

    pub fn stop(&self, index: usize) -> Option<&str> {
        self.route.get(index).map(String::as_str)
    }

    /// Replaces the route with the shortest path from the current location (or from the first
    /// stop when no location is set) to the destination.
    ///
    /// Returns false, leaving the route untouched, if there is no starting point or no path.
    pub fn plan_route_to(&mut self, destination: &str, graph: &CityGraph) -> bool {
        let Some(start) = self.location().or_else(|| self.next_stop()) else {
            debug!("{} has no starting point to plan a route from", self.name);
            return false;
        };

        let path = graph.find_shortest_path(start, destination);
        if path.is_empty() {
            debug!("{} cannot reach {destination} from {start}", self.name);
            return false;
        }

        debug!("{} planned route {path:?}", self.name);
        self.route = path;
        true
    }

    /// Writes the traveler as JSON into the file, replacing its content.
    pub fn save_to_file(&self, path: impl AsRef<FsPath>) -> Result<(), TravelerError> {
        let path = path.as_ref();
        fs::write(path, serialize_traveler(self)?)?;
        info!("Saved traveler {} into {path:?}", self.name);
        Ok(())
    }

    /// Reads a traveler previously written by [`Traveler::save_to_file`].
    pub fn load_from_file(path: impl AsRef<FsPath>) -> Result<Self, TravelerError> {
        let path = path.as_ref();
        let traveler = deserialize_traveler(&fs::read_to_string(path)?)?;
        info!("Loaded traveler {} from {path:?}", traveler.name);
        Ok(traveler)
    }
}

impl PartialEq for Traveler {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.location == other.location
    }
}

impl Eq for Traveler {}

impl Hash for Traveler {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.location.hash(state);
    }
}

impl Index<usize> for Traveler {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.route[index]
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traveler: {} | Location: {} | Route: {}",
            self.name,
            self.location().unwrap_or_default(),
            self.route_display()
        )
    }
}
