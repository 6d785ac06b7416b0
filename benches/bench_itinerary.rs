use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itinerary_ga::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    graph::{Graph, Place},
    population::PopulationFactory,
    rng::RandomNumberGenerator,
    route::Anchors,
    selection::rank_population,
    strategy::{BreedStrategy, BreedingContext, ItineraryBreedStrategy},
};

fn grid_graph(size: usize) -> Graph<String> {
    let places: Vec<Place> = (0..size)
        .map(|i| Place::new(format!("P{}", i), (i % 7) as f64, (i / 7) as f64))
        .collect();
    Graph::from_places(&places).unwrap()
}

fn bench_ranking(c: &mut Criterion) {
    let graph = grid_graph(60);
    let anchors = Anchors::new("P0".to_string(), "P59".to_string());
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("ranking");
    for size in [100, 1000, 5000].iter() {
        let population = PopulationFactory::default()
            .generate(*size, &graph, &anchors, 20, &mut rng)
            .unwrap();

        group.bench_function(&format!("sequential_{}", size), |b| {
            b.iter(|| rank_population(black_box(&population), &graph, usize::MAX))
        });
        group.bench_function(&format!("parallel_{}", size), |b| {
            b.iter(|| rank_population(black_box(&population), &graph, 1))
        });
    }
    group.finish();
}

fn bench_breeding(c: &mut Criterion) {
    let graph = grid_graph(40);
    let anchors = Anchors::new("P0".to_string(), "P39".to_string());
    let strategy = ItineraryBreedStrategy::new();
    let mut rng = RandomNumberGenerator::from_seed(2);
    let population = PopulationFactory::default()
        .generate(200, &graph, &anchors, 15, &mut rng)
        .unwrap();
    let mating_pool: Vec<_> = population.iter().collect();
    let context = BreedingContext {
        graph: &graph,
        anchors: &anchors,
        mutation_rate: 0.3,
    };

    c.bench_function("itinerary_breeding_200", |b| {
        b.iter(|| {
            let result = strategy.breed(black_box(&mating_pool), 100, &context, &mut rng);
            assert!(result.is_ok());
        })
    });
}

fn bench_evolve(c: &mut Criterion) {
    let graph = grid_graph(30);
    let anchors = Anchors::new("P0".to_string(), "P29".to_string());
    let launcher = EvolutionLauncher::with_defaults(graph);
    let options = EvolutionOptions::builder()
        .num_generations(50)
        .population_size(60)
        .path_length(12)
        .log_level(LogLevel::None)
        .build();

    c.bench_function("evolve_30_places", |b| {
        b.iter(|| {
            let mut rng = RandomNumberGenerator::from_seed(3);
            launcher.evolve(black_box(&options), &anchors, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_ranking, bench_breeding, bench_evolve);
criterion_main!(benches);
