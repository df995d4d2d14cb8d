mod graph;

use std::fs;

use test_log::test;
use travel_planner::{CityGraph, Distance, ShortestPathConfig, TravelLog, Traveler, TravelerError};

use crate::graph::{BALTICS_GRAPH, TRIANGLE_GRAPH};

#[test]
fn traveler_plan_route_001() {
    let graph: &CityGraph = &TRIANGLE_GRAPH;
    let mut traveler = Traveler::new("Ada").unwrap();

    assert!(!traveler.plan_route_to("C", graph));
    assert!(traveler.route_items().is_empty());

    traveler.set_location("paris");
    assert_eq!(traveler.location(), Some("Paris"));
}

#[test]
fn traveler_plan_route_002() {
    let graph: &CityGraph = &BALTICS_GRAPH;
    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.set_location("klaipeda");

    assert!(traveler.plan_route_to("Tallinn", graph));
    assert_eq!(traveler.next_stop(), Some("Klaipeda"));
    assert_eq!(traveler.route_items().last().map(String::as_str), Some("Tallinn"));

    // measuring the stored route gives back the distance of the search
    let searched = graph
        .shortest_path(&ShortestPathConfig::default(), "Klaipeda", "Tallinn")
        .unwrap();
    assert_eq!(
        graph.path_distance(traveler.route_items()),
        Some(searched.distance)
    );
    assert_eq!(searched.distance, Distance::from_units(594));
}

#[test]
fn traveler_plan_route_003() {
    let graph: &CityGraph = &BALTICS_GRAPH;
    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.add_city("Riga").unwrap();
    traveler.add_city("Helsinki").unwrap();

    assert!(traveler.plan_route_to("Vilnius", graph));
    assert_eq!(traveler.route_items(), ["Riga", "Panevezys", "Vilnius"]);

    // an unreachable destination leaves the route untouched
    assert!(!traveler.plan_route_to("Helsinki", graph));
    assert_eq!(traveler.route_items(), ["Riga", "Panevezys", "Vilnius"]);
}

#[test]
fn traveler_sort_route_001() {
    let graph: &CityGraph = &BALTICS_GRAPH;
    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.set_location("Vilnius");
    assert!(traveler.plan_route_to("Tallinn", graph));

    traveler.sort_route();
    assert_eq!(
        traveler.route_items(),
        ["Panevezys", "Riga", "Tallinn", "Vilnius"]
    );
    assert_eq!(graph.path_distance(traveler.route_items()), None);
}

#[test]
fn traveler_persistence_001() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ada.json");

    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.set_location("vilnius");
    assert!(traveler.plan_route_to("Riga", &BALTICS_GRAPH));
    traveler.save_to_file(&path).unwrap();

    let loaded = Traveler::load_from_file(&path).unwrap();
    assert_eq!(loaded, traveler);
    assert_eq!(loaded.route_items(), traveler.route_items());
    assert_eq!(loaded.to_string(), traveler.to_string());
}

#[test]
fn traveler_persistence_002() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(
        Traveler::load_from_file(dir.path().join("missing.json")).unwrap_err(),
        TravelerError::NotFound
    );

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"name\": \"Ada\", ").unwrap();
    assert_eq!(
        Traveler::load_from_file(&path).unwrap_err(),
        TravelerError::InvalidData
    );
    assert_eq!(
        TravelerError::InvalidData.to_string(),
        "Invalid travel data"
    );
}

#[test]
fn traveler_persistence_003() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grace.json");
    fs::write(
        &path,
        r#"{
            "name": "Grace",
            "currentLocation": "riga",
            "route": ["Riga", "Tallinn"]
        }"#,
    )
    .unwrap();

    let traveler = Traveler::load_from_file(&path).unwrap();
    assert_eq!(traveler.name(), "Grace");
    assert_eq!(traveler.location(), Some("Riga"));
    assert_eq!(traveler.route_display(), "Riga -> Tallinn");
}

#[test]
fn traveler_journal_001() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.log");

    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.set_location("Riga");
    assert!(traveler.plan_route_to("Tallinn", &BALTICS_GRAPH));

    let mut journal = TravelLog::new();
    journal.add(traveler.clone());
    journal.flush(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Traveler: Ada | Location: Riga | Route: Riga -> Tallinn\n"
    );
}

#[test]
fn traveler_plan_route_004() {
    // the same pair declared twice, the cheaper connection last
    let graph: CityGraph = "A-B,7\nB-A,3\nB-C,2".parse().unwrap();
    let mut traveler = Traveler::new("Ada").unwrap();
    traveler.set_location("A");

    assert!(traveler.plan_route_to("C", &graph));
    assert_eq!(traveler.route_items(), ["A", "B", "C"]);

    let searched = graph
        .shortest_path(&ShortestPathConfig::default(), "A", "C")
        .unwrap();
    assert_eq!(searched.distance, Distance::from_units(5));
    assert_eq!(
        graph.path_distance(traveler.route_items()),
        Some(searched.distance)
    );
}
