//! End-to-end runs of both engines on instances with known optima.

use std::f64::consts::PI;
use u_stepopt::ga::{GaConfig, GaEngine, GaRunner, Item, ItemSet, ItemSetConfig};
use u_stepopt::random::create_rng;
use u_stepopt::sa::{generate_cities, City, CityFieldConfig, SaConfig, SaEngine, SaRunner};
use u_stepopt::EngineError;

fn items(values: &[u64]) -> Vec<Item> {
    values.iter().map(|&v| Item::new(v).unwrap()).collect()
}

#[test]
fn four_items_reach_target_fifty() {
    let items = items(&[10, 20, 30, 40]);
    let mut hits = 0;
    for seed in 0..20 {
        let config = GaConfig::default().with_max_generations(200).with_seed(seed);
        let result = GaRunner::run(&items, 50.0, &config).unwrap();
        if result.exact_match {
            assert_eq!(result.best_sum, 50);
            assert_eq!(result.best_fitness, 1.0);
            let picked: Vec<u64> = result
                .best_genome
                .iter()
                .zip(&items)
                .filter(|(bit, _)| **bit)
                .map(|(_, item)| item.value())
                .collect();
            assert!(picked == vec![10, 40] || picked == vec![20, 30], "{picked:?}");
            hits += 1;
        }
    }
    assert!(hits >= 18, "only {hits}/20 seeded runs hit the target");
}

#[test]
fn single_item_found_within_a_few_generations() {
    let items = items(&[100]);
    for seed in 0..20 {
        let config = GaConfig::default().with_seed(seed);
        let mut ga = GaEngine::new(&items, 100.0, &config).unwrap();
        let mut found = false;
        for _ in 0..3 {
            let report = ga.step();
            if report.best_fitness == 1.0 {
                assert_eq!(report.best_genome, vec![true]);
                found = true;
                break;
            }
        }
        assert!(found, "seed {seed} did not find the single-item optimum");
    }
}

#[test]
fn generated_instance_gets_close_to_target() {
    let mut rng = create_rng(2024);
    let set = ItemSet::generate(&ItemSetConfig::default(), &mut rng).unwrap();
    let config = GaConfig::default().with_max_generations(300).with_seed(2024);
    let result = GaRunner::run(set.items(), set.target(), &config).unwrap();

    let deviation = (result.best_sum as f64 - set.target()).abs();
    assert!(
        deviation < 0.01 * set.target(),
        "best sum {} too far from target {}",
        result.best_sum,
        set.target()
    );
}

fn pentagon(radius: f64) -> Vec<City> {
    // Listed out of hull order so the identity tour is not optimal.
    [0usize, 2, 4, 1, 3]
        .iter()
        .enumerate()
        .map(|(index, &k)| {
            let angle = 2.0 * PI * k as f64 / 5.0;
            City::new(500.0 + radius * angle.cos(), 500.0 + radius * angle.sin(), index)
        })
        .collect()
}

#[test]
fn pentagon_converges_to_perimeter() {
    let radius = 200.0;
    let perimeter = 10.0 * radius * (PI / 5.0).sin();
    let cities = pentagon(radius);

    for seed in 0..10 {
        let config = SaConfig::default().with_seed(seed);
        let result = SaRunner::run(&cities, &config).unwrap();
        assert!(
            (result.best_distance - perimeter).abs() < 1e-6,
            "seed {seed}: got {} expected {perimeter}",
            result.best_distance
        );
    }
}

#[test]
fn engine_driven_by_hand_matches_runner() {
    let mut rng = create_rng(77);
    let cities = generate_cities(&CityFieldConfig::default(), &mut rng).unwrap();
    let config = SaConfig::default().with_seed(77);

    let mut sa = SaEngine::new(&cities, &config).unwrap();
    while sa.temperature() > config.min_temperature {
        sa.anneal();
    }
    let result = SaRunner::run(&cities, &config).unwrap();

    assert_eq!(sa.best_solution(), result.best.as_slice());
    assert_eq!(sa.best_distance(), result.best_distance);
    assert_eq!(sa.iterations(), result.iterations);
}

#[test]
fn empty_instances_rejected() {
    assert_eq!(
        GaEngine::new(&[], 1.0, &GaConfig::default()).err(),
        Some(EngineError::EmptyInstance("items"))
    );
    assert_eq!(
        SaEngine::new(&[], &SaConfig::default()).err(),
        Some(EngineError::EmptyInstance("cities"))
    );
}
