/// Asserts that the live population matches the expected size.
#[macro_export]
macro_rules! assert_population {
    ($sim:expr, $count:expr) => {
        assert_eq!(
            $sim.population().len(),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts the live count of one kind.
#[macro_export]
macro_rules! assert_kind_count {
    ($sim:expr, $kind:expr, $count:expr) => {
        assert_eq!(
            $sim.alive_counts_by_kind().get($kind),
            $count,
            "{} count mismatch",
            $kind
        );
    };
}

/// Asserts that the cell with the given ID is no longer in the population.
#[macro_export]
macro_rules! assert_cell_dead {
    ($sim:expr, $id:expr) => {
        assert!(
            $sim.population().get($id).is_none(),
            "Cell {} should be dead but was found alive",
            $id
        );
    };
}

/// Asserts that the cell with the given ID is still alive.
#[macro_export]
macro_rules! assert_cell_alive {
    ($sim:expr, $id:expr) => {
        assert!(
            $sim.population().get($id).is_some_and(|c| c.alive),
            "Cell {} should be alive",
            $id
        );
    };
}
