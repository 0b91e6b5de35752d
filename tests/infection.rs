mod common;
use cellsim_core::rng::{AlwaysFail, AlwaysSucceed, Scripted};
use cellsim_data::CellKind;
use common::SimulationBuilder;

#[test]
fn test_pathogen_kills_neighbour_within_radius() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysSucceed)
        .immortal()
        .with_strength(10)
        .with_cell(CellKind::Pathogen, 50.0, 50.0)
        .with_cell(CellKind::Normal, 50.0, 90.0)
        .build();
    let victim = sim.population().cells()[1].id;

    let report = sim.tick();
    assert_eq!(report.infection_deaths, 1);
    assert_eq!(report.natural_deaths, 0);
    assert_cell_dead!(sim, victim);
    assert_kind_count!(sim, CellKind::Normal, 0);
    assert_kind_count!(sim, CellKind::Pathogen, 1);
}

#[test]
fn test_pathogen_dying_of_chance_still_scans() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysSucceed)
        .immortal()
        .with_config(|c| c.kinds.pathogen.death_rate = 1.0)
        .with_strength(10)
        .with_cell(CellKind::Pathogen, 50.0, 50.0)
        .with_cell(CellKind::Normal, 50.0, 90.0)
        .build();

    let report = sim.tick();
    assert_eq!(report.natural_deaths, 1);
    assert_eq!(report.infection_deaths, 1);
    assert_population!(sim, 0);
}

#[test]
fn test_senescent_pathogen_still_scans() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysSucceed)
        .immortal()
        .with_strength(10)
        .with_cell(CellKind::Pathogen, 50.0, 50.0)
        .with_cell(CellKind::Liver, 60.0, 50.0)
        .build();
    let pathogen = sim.population().cells()[0].id;
    let cell = sim.population_mut().get_mut(pathogen).unwrap();
    cell.age = cell.lifespan;

    let report = sim.tick();
    assert_eq!(report.senescence_deaths, 1);
    assert_eq!(report.infection_deaths, 1);
    assert_cell_dead!(sim, pathogen);
    assert_kind_count!(sim, CellKind::Liver, 0);
}

#[test]
fn test_radius_is_inclusive() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysSucceed)
        .immortal()
        .with_cell(CellKind::Pathogen, 50.0, 50.0)
        .with_cell(CellKind::Normal, 50.0, 100.0)
        .with_cell(CellKind::Liver, 50.0, 100.5)
        .build();

    let report = sim.tick();
    assert_eq!(report.infection_deaths, 1);
    assert_kind_count!(sim, CellKind::Normal, 0);
    assert_kind_count!(sim, CellKind::Liver, 1);
}

#[test]
fn test_no_kill_when_rolls_fail() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysFail)
        .with_strength(10)
        .with_cell(CellKind::Pathogen, 50.0, 50.0)
        .with_cell(CellKind::Brain, 55.0, 50.0)
        .build();

    sim.tick();
    assert_population!(sim, 2);
}

#[test]
fn test_pathogens_infect_each_other() {
    let mut sim = SimulationBuilder::new()
        .with_source(AlwaysSucceed)
        .immortal()
        .with_cell(CellKind::Pathogen, 200.0, 200.0)
        .with_cell(CellKind::Pathogen, 210.0, 200.0)
        .build();
    let first = sim.population().cells()[0].id;

    let report = sim.tick();
    // The second pathogen dies before its own turn, so it never scans.
    assert_eq!(report.infection_deaths, 1);
    assert_cell_alive!(sim, first);
    assert_kind_count!(sim, CellKind::Pathogen, 1);
}

#[test]
fn test_kill_chance_scales_with_strength() {
    let build = |strength| {
        SimulationBuilder::new()
            .with_source(Scripted::new(vec![0.015]))
            .immortal()
            .with_strength(strength)
            .with_cell(CellKind::Pathogen, 300.0, 300.0)
            .with_cell(CellKind::Normal, 310.0, 300.0)
            .build()
    };

    // 5/10 * 0.02 = 0.01 misses a 0.015 roll; 10/10 * 0.02 hits it.
    let mut weak = build(5);
    weak.tick();
    assert_kind_count!(weak, CellKind::Normal, 1);

    let mut strong = build(10);
    strong.tick();
    assert_kind_count!(strong, CellKind::Normal, 0);
}

#[test]
fn test_strength_change_applies_to_next_tick() {
    let mut sim = SimulationBuilder::new()
        .with_source(Scripted::new(vec![0.015]))
        .immortal()
        .with_strength(1)
        .with_cell(CellKind::Pathogen, 300.0, 300.0)
        .with_cell(CellKind::Normal, 310.0, 300.0)
        .build();

    sim.tick();
    assert_kind_count!(sim, CellKind::Normal, 1);

    sim.set_strength(10);
    sim.tick();
    assert_kind_count!(sim, CellKind::Normal, 0);
}

#[test]
fn test_dense_cluster_spreads() {
    let mut sim = SimulationBuilder::new()
        .with_seed(3)
        .immortal()
        .with_strength(10)
        .with_cell(CellKind::Pathogen, 400.0, 300.0)
        .with_grid(CellKind::Normal, 400)
        .build();

    for _ in 0..200 {
        sim.tick();
    }
    assert!(sim.stats().total_infection_deaths > 0);
}
