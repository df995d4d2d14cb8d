use std::fs;
use std::path::Path as FsPath;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use tracing::info;

use crate::format::map::parse_city_map;
use crate::routing::{Path, ShortestPathConfig, shortest_path};
use crate::{CityId, Distance, MapError};

/// Weighted undirected graph of cities.
///
/// City names are interned into dense [`CityId`]s in the order they are first seen, and every
/// declared connection is stored in both directions with the same distance.
/// The graph can only be created by loading a map and is immutable afterwards.
#[derive(Debug, Clone)]
pub struct CityGraph {
    names: Vec<String>,
    index: FxHashMap<String, CityId>,
    adjacency: Vec<Vec<(CityId, Distance)>>,
    /// Position of each city in the lexicographic order of all the city names.
    name_ranks: Vec<u32>,
    edge_count: usize,
}

impl CityGraph {
    /// Loads a map file where each line declares a `CityA-CityB,Distance` connection.
    pub fn load_from_file(path: impl AsRef<FsPath>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let graph = Self::from_lines(content.lines())?;

        info!(
            "Loaded map {path:?} with {} cities and {} connections",
            graph.city_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Builds the graph from the lines of a map.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_city_map(lines)
    }

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    /// Number of declared (undirected) connections, parallel connections included.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Gets an iterator over all the city names in the order they were first declared.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns true if the trimmed name is a city of the map (case-sensitive).
    /// Blank names never belong to the map.
    pub fn contains_city(&self, name: &str) -> bool {
        self.city_id(name).is_some()
    }

    /// Resolves a (trimmed) city name into its ID.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.index.get(name).copied()
    }

    pub fn city_name(&self, city: CityId) -> Option<&str> {
        self.names.get(city.index()).map(String::as_str)
    }

    /// Gets an iterator over the direct connections of the city, in declaration order.
    /// Returns an empty iterator if the city doesn't belong to the map.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, Distance)> {
        self.city_id(name)
            .into_iter()
            .flat_map(|city| self.exiting_edges(city))
            .map(|&(neighbor, distance)| (self.names[neighbor.index()].as_str(), distance))
    }

    /// Computes the shortest path between the two cities with the default configuration.
    /// Returns the ordered list of city names (both ends included), or an empty list if either
    /// city is unknown or no path exists.
    pub fn find_shortest_path(&self, from: &str, to: &str) -> Vec<String> {
        self.shortest_path(&ShortestPathConfig::default(), from, to)
            .map(|path| self.path_names(&path))
            .unwrap_or_default()
    }

    /// Computes the shortest path between the two cities.
    pub fn shortest_path(&self, config: &ShortestPathConfig, from: &str, to: &str) -> Option<Path> {
        let origin = self.city_id(from)?;
        let destination = self.city_id(to)?;
        shortest_path(config, self, origin, destination)
    }

    pub fn path_names(&self, path: &Path) -> Vec<String> {
        path.cities
            .iter()
            .filter_map(|&city| self.city_name(city))
            .map(str::to_owned)
            .collect()
    }

    /// Gets the total distance of a walk over the map.
    ///
    /// Paths with less than 2 cities have a zero distance.
    /// Cities connected more than once are measured with their shortest connection.
    /// Returns None if any two consecutive cities are not directly connected.
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Option<Distance> {
        let mut total = Distance::ZERO;

        for window in path.windows(2) {
            let from = self.city_id(window[0].as_ref())?;
            let to = self.city_id(window[1].as_ref())?;

            // parallel connections: the walk takes the cheapest one
            let distance = self
                .exiting_edges(from)
                .iter()
                .filter(|(c, _)| *c == to)
                .map(|&(_, d)| d)
                .min()?;
            total += distance;
        }

        Some(total)
    }

    pub(crate) fn exiting_edges(&self, city: CityId) -> &[(CityId, Distance)] {
        self.adjacency
            .get(city.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn name_rank(&self, city: CityId) -> u32 {
        self.name_ranks.get(city.index()).copied().unwrap_or(u32::MAX)
    }
}

impl FromStr for CityGraph {
    type Err = MapError;

    fn from_str(map: &str) -> Result<Self, Self::Err> {
        Self::from_lines(map.lines())
    }
}

/// Accumulates the connections of a map before freezing them into a [`CityGraph`].
#[derive(Debug, Default)]
pub(crate) struct CityGraphBuilder {
    names: Vec<String>,
    index: FxHashMap<String, CityId>,
    adjacency: Vec<Vec<(CityId, Distance)>>,
    edge_count: usize,
}

impl CityGraphBuilder {
    pub const fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Inserts the connection in both directions.
    pub fn add_edge(&mut self, city_a: &str, city_b: &str, distance: Distance) {
        let a = self.intern(city_a);
        let b = self.intern(city_b);
        self.adjacency[a.index()].push((b, distance));
        self.adjacency[b.index()].push((a, distance));
        self.edge_count += 1;
    }

    fn intern(&mut self, name: &str) -> CityId {
        if let Some(&city) = self.index.get(name) {
            return city;
        }

        let city = CityId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), city);
        self.adjacency.push(vec![]);
        city
    }

    pub fn build(self) -> CityGraph {
        let mut sorted: Vec<usize> = (0..self.names.len()).collect();
        sorted.sort_by(|&i, &j| self.names[i].cmp(&self.names[j]));

        let mut name_ranks = vec![0; self.names.len()];
        for (rank, i) in sorted.into_iter().enumerate() {
            name_ranks[i] = rank as u32;
        }

        CityGraph {
            names: self.names,
            index: self.index,
            adjacency: self.adjacency,
            name_ranks,
            edge_count: self.edge_count,
        }
    }
}

pub mod dijkstra;
