#![cfg(feature = "serde")]

use itinerary_ga::{
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel},
    graph::{Graph, Place},
    rng::RandomNumberGenerator,
    route::{Anchors, Route},
    selection::TournamentSelection,
    strategy::ItineraryBreedStrategy,
};

#[test]
fn test_options_from_json() {
    let json = r#"{
        "num_generations": 25,
        "log_level": "Minimal",
        "population_size": 12,
        "path_length": 6,
        "initial_mutation_rate": 0.4,
        "minimum_mutation_rate": 0.1,
        "parallel_threshold": 500,
        "init_attempts_per_slot": 3
    }"#;

    let options: EvolutionOptions = serde_json::from_str(json).unwrap();

    assert_eq!(options.get_num_generations(), 25);
    assert_eq!(options.get_log_level(), LogLevel::Minimal);
    assert_eq!(options.get_population_size(), 12);
    assert_eq!(options.get_path_length(), 6);
    assert_eq!(options.get_init_attempts_per_slot(), 3);
    assert!(options.validate().is_ok());
}

#[test]
fn test_places_from_json() {
    let json = r#"[
        {"name": "Hotel", "lat": 0.0, "lon": 0.0},
        {"name": "Museum", "lat": 1.0, "lon": 2.0},
        {"name": "Station", "lat": 2.0, "lon": 2.0}
    ]"#;

    let places: Vec<Place> = serde_json::from_str(json).unwrap();
    let graph = Graph::from_places(&places).unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.distance(&"Hotel".to_string(), &"Museum".to_string()), 3.0);
}

#[test]
fn test_result_survives_json() {
    let mut graph = Graph::new();
    for from in ["A", "B", "C", "D", "E"] {
        for to in ["A", "B", "C", "D", "E"] {
            if from != to {
                graph.add_edge(from.to_string(), to.to_string(), 1.0).unwrap();
            }
        }
    }
    let launcher = EvolutionLauncher::new(
        graph,
        ItineraryBreedStrategy::new(),
        TournamentSelection::new(2).unwrap(),
    );
    let anchors = Anchors::new("A".to_string(), "E".to_string());
    let options = EvolutionOptions::builder()
        .num_generations(4)
        .population_size(4)
        .path_length(5)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(3);

    let result = launcher.evolve(&options, &anchors, &mut rng).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let restored: EvolutionResult<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, result);
    assert_eq!(restored.route.len(), 5);
}

#[test]
fn test_route_serializes_its_stops() {
    let route = Route::new(vec!["A".to_string(), "B".to_string()]);
    let json = serde_json::to_value(&route).unwrap();

    assert_eq!(json, serde_json::json!({"stops": ["A", "B"]}));
}
