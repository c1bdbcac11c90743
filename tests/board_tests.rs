//! Board invariants: cell values, transit, result sequences, partitioning.

use proptest::prelude::*;

use sagids::board::{is_valid_partition, Cell, Grid, Marker, MarkerId, Spot};
use sagids::core::{Fraction, GameConfig, GameRng, GridError, ResultSequence};

fn cell(x: i32, y: i32) -> Cell {
    Cell::new(Spot::new(x, y))
}

// =============================================================================
// Cell Properties
// =============================================================================

proptest! {
    #[test]
    fn value_depends_only_on_parity(x in 0i32..1000, y in 0i32..1000, dx in 0i32..50, dy in 0i32..50) {
        let base = cell(x, y);
        let shifted = cell(x + 2 * dx, y + 2 * dy);
        prop_assert_eq!(base.value(), shifted.value());
        prop_assert!([1, 3, 5, 7].contains(&base.value()));
    }

    #[test]
    fn transit_is_symmetric_and_reflexive(ax in 0i32..16, ay in 0i32..16, bx in 0i32..16, by in 0i32..16) {
        let a = cell(ax, ay);
        let b = cell(bx, by);
        prop_assert_eq!(a.transits(&b), b.transits(&a));
        prop_assert!(a.transits(&a));
    }

    #[test]
    fn result_sequence_is_bounded(n in 0i64..10, d in 1i64..10, c in 0i64..8) {
        let results: Vec<_> = ResultSequence::new(Fraction::new(n, d), c).collect();
        prop_assert!(results.len() <= (c + 1) as usize);
        for r in results {
            // Reduction only shrinks the raw pair, which lies in [0, 9]
            prop_assert!((0..=9).contains(r.numer()));
            prop_assert!((1..=9).contains(r.denom()));
        }
    }

    #[test]
    fn partition_never_conflicts(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::build(&config, &mut rng).unwrap();

        let cells = grid.partition(&mut rng, config.max_partition_attempts).unwrap();
        prop_assert_eq!(cells.len(), 4);
        prop_assert!(is_valid_partition(&cells));

        grid.mark(&cells).unwrap();
        let quadrants: Vec<_> = grid.markers().iter().map(|m| m.quadrant().unwrap()).collect();
        for (i, q) in quadrants.iter().enumerate() {
            prop_assert!(!quadrants[i + 1..].contains(q));
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_zero_marker_value_on_zero_cell() {
    let results: Vec<_> = ResultSequence::new(Fraction::new(0, 9), 0).collect();
    assert_eq!(results, vec![Fraction::new(0 % 10, 9 % 10)]);
}

#[test]
fn test_larger_board_partition() {
    // 9 markers on a 6x6 board: every quadrant is used
    let config = GameConfig::default()
        .with_sectors(9)
        .with_regions(4)
        .with_allowed_values((1..=9).map(|n| Fraction::new(n, 9)).collect())
        .with_max_partition_attempts(1000);
    let mut rng = GameRng::new(2024);
    let grid = Grid::build(&config, &mut rng).unwrap();
    assert_eq!(grid.size(), 6);

    let cells = grid.partition(&mut rng, config.max_partition_attempts).unwrap();
    assert_eq!(cells.len(), 9);
    assert!(is_valid_partition(&cells));
}

#[test]
fn test_impossible_partition_fails_fast() {
    // 16 markers on 8x8 would need 16 cells on distinct diagonals in both
    // directions; at most 14 exist
    let markers = (1..=16)
        .map(|i| Marker::new(MarkerId::new(i), Fraction::new(1, 9)))
        .collect();
    let grid = Grid::new(8, markers).unwrap();

    let err = grid.partition(&mut GameRng::new(3), 20).unwrap_err();
    match err {
        GridError::PartitionStarvation { placed, required, attempts } => {
            assert!(placed < 16);
            assert_eq!(required, 16);
            assert_eq!(attempts, 20);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mark_then_zone_matches_quadrant() {
    let config = GameConfig::default();
    let mut rng = GameRng::new(77);
    let mut grid = Grid::build(&config, &mut rng).unwrap();
    let cells = grid.partition(&mut rng, 64).unwrap();
    grid.mark(&cells).unwrap();

    for (marker, cell) in grid.markers().iter().zip(&cells) {
        assert_eq!(marker.cell, Some(*cell));
        let zone = marker.zone(&grid);
        assert_eq!(zone.len(), 4);
        assert!(zone.contains(cell));
        assert!(zone.iter().all(|c| c.quadrant() == cell.quadrant()));
    }
}
