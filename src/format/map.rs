use tracing::warn;

use crate::graph::CityGraphBuilder;
use crate::{CityGraph, Distance, MapError};

/// A single connection declared by a map line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapEdge<'a> {
    city_a: &'a str,
    city_b: &'a str,
    distance: Distance,
}

/// Parses the lines of a map into a city graph.
///
/// Any malformed line aborts the whole load, and so does a map without connections.
pub fn parse_city_map<I, S>(lines: I) -> Result<CityGraph, MapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = CityGraphBuilder::default();

    for (index, raw_line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = raw_line.as_ref().trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let edge = parse_edge(line, line_number)
            .inspect_err(|e| warn!("Rejecting map line {line_number} '{line}': {e}"))?;

        builder.add_edge(edge.city_a, edge.city_b, edge.distance);
    }

    if builder.is_empty() {
        return Err(MapError::Empty);
    }

    Ok(builder.build())
}

fn parse_edge(line: &str, line_number: usize) -> Result<MapEdge<'_>, MapError> {
    let (cities, distance) =
        split_pair(line, ',').ok_or(MapError::InvalidFormat { line: line_number })?;

    let distance = distance.trim();
    let distance = distance
        .parse::<i32>()
        .ok()
        .and_then(|d| u64::try_from(d).ok())
        .filter(|&d| d > 0)
        .map(Distance::from_units)
        .ok_or_else(|| MapError::InvalidDistance {
            line: line_number,
            value: distance.to_owned(),
        })?;

    let (city_a, city_b) =
        split_pair(cities.trim(), '-').ok_or(MapError::InvalidCities { line: line_number })?;
    let (city_a, city_b) = (city_a.trim(), city_b.trim());

    if city_a.is_empty() || city_b.is_empty() {
        return Err(MapError::EmptyCityName { line: line_number });
    }

    if city_a.to_lowercase() == city_b.to_lowercase() {
        return Err(MapError::SelfLoop {
            line: line_number,
            city: city_a.to_owned(),
        });
    }

    Ok(MapEdge {
        city_a,
        city_b,
        distance,
    })
}

/// Splits the text on the separator, expecting exactly two fields.
fn split_pair(text: &str, separator: char) -> Option<(&str, &str)> {
    let mut fields = text.split(separator);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}
