use std::collections::BinaryHeap;

use strum::{Display, EnumString};
use tracing::debug;

use crate::graph::dijkstra::{HeapElement, unpack_path};
use crate::{CityGraph, CityId, Distance};

/// Order in which cities at the same tentative distance leave the frontier.
/// This decides which path is reported when several paths share the minimum distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum TieBreak {
    /// The city inserted first into the frontier is extracted first.
    #[default]
    InsertionOrder,
    /// The city with the lexicographically smallest name is extracted first.
    CityName,
}

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Paths longer than this distance are not explored.
    pub max_distance: Distance,
    pub tie_break: TieBreak,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::MAX,
            tie_break: TieBreak::InsertionOrder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub distance: Distance,
    /// Cities from origin to destination, both included.
    pub cities: Vec<CityId>,
}

impl TieBreak {
    fn rank(&self, graph: &CityGraph, city: CityId) -> u32 {
        match self {
            Self::InsertionOrder => 0,
            Self::CityName => graph.name_rank(city),
        }
    }
}

/// Single-source shortest path (Dijkstra) from origin that stops as soon as the destination
/// leaves the frontier.
pub fn shortest_path(
    config: &ShortestPathConfig,
    graph: &CityGraph,
    origin: CityId,
    destination: CityId,
) -> Option<Path> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    // (current) shortest distance from origin to each city
    let mut shortest_distances = vec![Distance::MAX; graph.city_count()];
    *shortest_distances.get_mut(origin.index())? = Distance::ZERO;

    // previous city on the current best known path from origin to each city
    let mut previous: Vec<Option<CityId>> = vec![None; graph.city_count()];

    let mut sequence = 0;
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Distance::ZERO,
        rank: config.tie_break.rank(graph, origin),
        sequence,
        city: origin,
    }]);

    while let Some(element) = frontier.pop() {
        if element.city == destination {
            let cities = unpack_path(&previous, destination);
            if cities.first() != Some(&origin) {
                debug!("Destination {destination:?} is not connected to {origin:?}");
                return None;
            }

            return Some(Path {
                distance: element.distance,
                cities,
            });
        }

        // stale entry: a cheaper way to this city was already processed
        if element.distance > shortest_distances[element.city.index()] {
            continue;
        }

        for &(neighbor, length) in graph.exiting_edges(element.city) {
            let distance = element.distance + length;
            if distance > config.max_distance {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distances[neighbor.index()] {
                shortest_distances[neighbor.index()] = distance;
                previous[neighbor.index()] = Some(element.city);

                sequence += 1;
                frontier.push(HeapElement {
                    distance,
                    rank: config.tie_break.rank(graph, neighbor),
                    sequence,
                    city: neighbor,
                });
            }
        }
    }

    None
}
