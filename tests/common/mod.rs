//! Common test utilities and assertion helpers.
//!
//! Builders for grid configs and engines, plus the overlap/coverage
//! assertions shared by the layout and resize tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use std::collections::HashSet;

use gridflow::{Cell, GridConfig, GridEngine, ItemSpec};

/// Unit item edge used by every test grid, in pixels.
pub const ITEM: f32 = 100.0;

/// Gap used by every test grid, in pixels.
pub const GAP: f32 = 10.0;

/// Config with `count` items declaring the given spans and the given
/// maximum column count.
pub fn config_with_spans(spans: &[(u32, u32)], columns: u32) -> GridConfig {
    GridConfig {
        number_of_columns: columns,
        item_width: ITEM,
        item_height: ITEM,
        gap: GAP,
        items: spans
            .iter()
            .map(|&(span_cols, span_rows)| ItemSpec {
                span_cols,
                span_rows,
            })
            .collect(),
    }
}

/// Config with `count` unit items.
pub fn unit_config(count: usize, columns: u32) -> GridConfig {
    config_with_spans(&vec![(1, 1); count], columns)
}

/// Width at which exactly `columns` 110px columns fit.
pub fn width_for_columns(columns: u32) -> f32 {
    columns as f32 * (ITEM + GAP)
}

/// Engine with `count` unit items laid out at exactly `columns` columns.
pub fn unit_engine(count: usize, columns: u32) -> GridEngine {
    GridEngine::new(unit_config(count, columns), width_for_columns(columns))
        .expect("valid test config")
}

/// Recover a published cell's span from its pixel footprint.
pub fn span_of(cell: &Cell) -> (u32, u32) {
    let span_x = ((cell.size_x - ITEM) / (ITEM + GAP)).round() as u32 + 1;
    let span_y = ((cell.size_y - ITEM) / (ITEM + GAP)).round() as u32 + 1;
    (span_x, span_y)
}

/// The slot set an item's published cell covers.
pub fn slots_of(cell: &Cell) -> HashSet<(u32, u32)> {
    let (span_x, span_y) = span_of(cell);
    let mut slots = HashSet::new();
    for row in cell.row..cell.row + span_y {
        for col in cell.col..cell.col + span_x {
            slots.insert((row, col));
        }
    }
    slots
}

/// Every committed layout must satisfy these invariants:
/// - the published list covers identities 1..=N at positions `index - 1`
/// - geometry is exactly what the calculator derives from slot and span
/// - no two items' slot sets intersect
pub fn assert_layout_invariants(engine: &GridEngine) {
    let cells = engine.cells();
    assert_eq!(
        cells.len(),
        engine.config().item_count(),
        "published list must hold one cell per item"
    );

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.index as usize, i + 1, "list position must be index - 1");
        assert_geometry_consistent(cell);
        for slot in slots_of(cell) {
            assert!(
                seen.insert(slot),
                "item {} overlaps another item at {:?}",
                cell.index,
                slot
            );
        }
    }
}

/// A cell's pixels must be derivable from its slot coordinates and span.
pub fn assert_geometry_consistent(cell: &Cell) {
    assert_eq!(cell.x, cell.col as f32 * (ITEM + GAP), "x drifted");
    assert_eq!(cell.y, cell.row as f32 * (ITEM + GAP), "y drifted");
    let (span_x, span_y) = span_of(cell);
    assert_eq!(cell.size_x, ITEM * span_x as f32 + GAP * (span_x as f32 - 1.0));
    assert_eq!(cell.size_y, ITEM * span_y as f32 + GAP * (span_y as f32 - 1.0));
}

/// The anchor slots of every item, keyed by identity order.
pub fn positions(engine: &GridEngine) -> Vec<(u32, u32)> {
    engine
        .cells()
        .iter()
        .map(|cell| (cell.row, cell.col))
        .collect()
}
