use serde::{Deserialize, Deserializer, Serialize};

use crate::{Traveler, TravelerError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TravelerRecordRef<'a> {
    name: &'a str,
    current_location: Option<&'a str>,
    route: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TravelerRecord {
    #[serde(deserialize_with = "nullable")]
    name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    current_location: Option<String>,
    #[serde(default)]
    route: Option<Vec<String>>,
}

/// The key must be present, although its value can be null.
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer)
}

/// Serializes the traveler into a pretty-printed JSON object.
pub fn serialize_traveler(traveler: &Traveler) -> Result<String, TravelerError> {
    let record = TravelerRecordRef {
        name: traveler.name(),
        current_location: traveler.location(),
        route: traveler.route_items(),
    };

    Ok(serde_json::to_string_pretty(&record)?)
}

/// Deserializes a traveler from its JSON object.
///
/// The location goes through [`Traveler::set_location`] again, so its casing rule is applied to
/// hand-edited files. The `route` key is optional, `name` and `currentLocation` are not.
/// Any missing name, blank route stop or malformed JSON is reported as
/// [`TravelerError::InvalidData`].
pub fn deserialize_traveler(data: &str) -> Result<Traveler, TravelerError> {
    let TravelerRecord {
        name,
        current_location,
        route,
    } = serde_json::from_str(data)?;

    let mut traveler = Traveler::new(name.unwrap_or_default())
        .map_err(|_| TravelerError::InvalidData)?;

    if let Some(location) = current_location {
        traveler.set_location(&location);
    }

    for city in route.unwrap_or_default() {
        traveler
            .add_city(city)
            .map_err(|_| TravelerError::InvalidData)?;
    }

    Ok(traveler)
}
