//! The cell value type published by the layout engine.

use serde::{Deserialize, Serialize};

/// One item's committed place in the grid: slot coordinates plus the pixel
/// geometry derived from them.
///
/// Cells are plain values. The engine never mutates a stored cell in place;
/// placement and resize replace the whole value with one freshly derived by
/// the geometry calculator, so `x`, `y`, `size_x`, `size_y` always agree
/// with `row`, `col` and the item's current span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Grid row of the cell's top-left unit.
    pub row: u32,
    /// Grid column of the cell's top-left unit.
    pub col: u32,
    /// Pixel position of the left edge.
    pub x: f32,
    /// Pixel position of the top edge.
    pub y: f32,
    /// Pixel width, gap-aware when the item spans several columns.
    pub size_x: f32,
    /// Pixel height, gap-aware when the item spans several rows.
    pub size_y: f32,
    /// 1-based identity of the occupying item. Stable for the item's
    /// lifetime; the published layout list is indexed by `index - 1`.
    pub index: u32,
}
