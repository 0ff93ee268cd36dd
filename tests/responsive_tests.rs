//! Responsive column policy tests.
//!
//! Column recomputation from width signals, breakpoint rebuilds, the
//! compact flag, centering margin, and the reserved-width deduction.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{positions, unit_engine, width_for_columns, GAP, ITEM};
use test_case::test_case;

#[test_case(0.0, 2; "zero width clamps to minimum")]
#[test_case(219.0, 2; "below two columns clamps to minimum")]
#[test_case(220.0, 2; "exactly two columns")]
#[test_case(329.0, 2; "just under three columns")]
#[test_case(330.0, 3; "exactly three columns")]
#[test_case(440.0, 4; "exactly four columns")]
#[test_case(10_000.0, 4; "very wide clamps to configured maximum")]
fn test_columns_for_width(width: f32, expected: u32) {
    let mut engine = unit_engine(6, 4);
    engine.on_width_changed(width);
    assert_eq!(engine.columns(), expected);
}

#[test]
fn test_shrink_rebuilds_at_two_columns() {
    let mut engine = unit_engine(6, 4);
    assert!(!engine.is_compact());

    let layout = engine.on_width_changed(width_for_columns(2));
    assert_eq!(layout.columns, 2);
    assert!(layout.compact);

    // all items re-registered in identity order, row-major at 2 columns
    assert_eq!(
        positions(&engine),
        vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
    );
    assert_eq!(engine.grid_height(), 3.0 * ITEM + 2.0 * GAP);
    common::assert_layout_invariants(&engine);
}

#[test]
fn test_grow_rebuilds_back() {
    let mut engine = unit_engine(6, 4);
    engine.on_width_changed(width_for_columns(2));
    let layout = engine.on_width_changed(width_for_columns(4));

    assert_eq!(layout.columns, 4);
    assert!(!layout.compact);
    assert_eq!(
        positions(&engine),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 1)]
    );
    assert_eq!(engine.grid_height(), 2.0 * ITEM + GAP);
}

#[test]
fn test_same_column_count_preserves_layout() {
    let mut engine = unit_engine(6, 4);
    engine.resize(1, 2, 2).unwrap();
    let before = positions(&engine);

    // a width wiggle that stays inside the 4-column band rebuilds nothing
    engine.on_width_changed(width_for_columns(4) + 40.0);
    assert_eq!(positions(&engine), before);
}

#[test]
fn test_breakpoint_rebuild_collapses_expanded_item() {
    let config = common::config_with_spans(&[(1, 1), (2, 2), (1, 1), (1, 1), (1, 1), (1, 1)], 4);
    let mut engine = gridflow::GridEngine::new(config, width_for_columns(4)).unwrap();
    engine.activate(2).unwrap();
    assert_eq!(engine.selected(), Some(2));
    assert_eq!(common::span_of(&engine.cells()[1]), (2, 2));

    engine.on_width_changed(width_for_columns(2));
    // the rebuild re-registers everything at unit span and drops the
    // selection
    assert_eq!(engine.selected(), None);
    assert_eq!(common::span_of(&engine.cells()[1]), (1, 1));
    common::assert_layout_invariants(&engine);
}

#[test]
fn test_margin_follows_width_signals() {
    let mut engine = unit_engine(6, 4);
    // 440 available, 430 grid
    assert_eq!(engine.grid_width(), 430.0);
    assert_eq!(engine.margin_left(), 5.0);

    let layout = engine.on_width_changed(500.0);
    // still 4 columns; margin absorbs the extra width
    assert_eq!(layout.columns, 4);
    assert_eq!(engine.margin_left(), (500.0 - 430.0) / 2.0);
}

#[test]
fn test_margin_matches_rebuilt_column_count() {
    let mut engine = unit_engine(6, 4);
    let layout = engine.on_width_changed(width_for_columns(3));

    // margin must be derived from the 3-column grid, not the old one
    assert_eq!(layout.columns, 3);
    let grid_width = 3.0 * ITEM + 2.0 * GAP;
    assert_eq!(engine.margin_left(), (width_for_columns(3) - grid_width) / 2.0);
}

#[test]
fn test_reserved_width_is_deducted() {
    let mut engine = unit_engine(6, 4);
    engine.on_width_changed(width_for_columns(4) + 20.0);
    assert_eq!(engine.columns(), 4);

    // 30px of scrollbar pushes the effective width under four columns
    let layout = engine.set_reserved_width(30.0);
    assert_eq!(layout.columns, 3);

    // and releasing it restores them
    let layout = engine.set_reserved_width(0.0);
    assert_eq!(layout.columns, 4);
}

#[test]
fn test_layout_snapshot_matches_getters() {
    let mut engine = unit_engine(4, 4);
    let layout = engine.on_width_changed(width_for_columns(3));

    assert_eq!(layout.cells, engine.cells().to_vec());
    assert_eq!(layout.grid_height, engine.grid_height());
    assert_eq!(layout.margin_left, engine.margin_left());
    assert_eq!(layout.columns, engine.columns());
    assert_eq!(layout.compact, engine.is_compact());
}
