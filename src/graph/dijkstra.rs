use std::cmp::Ordering;

use crate::{CityId, Distance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement {
    /// Current shortest distance from origin to this city.
    pub distance: Distance,
    /// Secondary priority among elements at the same distance.
    pub rank: u32,
    /// Insertion order into the frontier.
    pub sequence: usize,
    pub city: CityId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.rank.cmp(&self.rank))
            // first inserted wins among equal priorities
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unpacks the shortest path from destination back to origin.
pub fn unpack_path(previous: &[Option<CityId>], destination: CityId) -> Vec<CityId> {
    let mut cities = vec![destination];
    let mut next = destination;

    while let Some(&Some(city)) = previous.get(next.index()) {
        next = city;
        cities.push(city);
    }

    cities.reverse();
    cities
}
