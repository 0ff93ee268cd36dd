//! The grid engine: placement, resize/reflow, and the responsive column
//! policy, all operating on the occupancy matrix.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::layout::geometry::{ItemMetrics, MIN_FIT_COLUMNS};
use crate::layout::matrix::{GridMatrix, SlotBlock};

/// A committed layout snapshot, published by every mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// One cell per item, at position `index - 1`.
    pub cells: Vec<Cell>,
    /// Total grid height in pixels.
    pub grid_height: f32,
    /// Margin that centers the grid inside the available width.
    pub margin_left: f32,
    /// Current responsive column count.
    pub columns: u32,
    /// Whether the grid sits at the compact (two-column) breakpoint.
    pub compact: bool,
}

/// Owns the occupancy matrix and every operation that mutates it.
///
/// All mutation is synchronous and exclusive (`&mut self`); callers
/// serialize their own triggers and debounce width-change bursts. A failed
/// call returns before any slot is touched, so the committed layout
/// survives intact.
#[derive(Debug)]
pub struct GridEngine {
    config: GridConfig,
    metrics: ItemMetrics,
    matrix: GridMatrix,
    /// Published cells, one per item, at `index - 1`.
    cells: Vec<Cell>,
    columns: u32,
    available_width: f32,
    reserved_width: f32,
    grid_height: f32,
    margin_left: f32,
    selected: Option<u32>,
}

impl GridEngine {
    /// Validate the config, then pack every item into its initial unit cell
    /// in identity order.
    ///
    /// # Errors
    /// Returns the config's first violated constraint; no engine state
    /// exists on failure.
    pub fn new(config: GridConfig, available_width: f32) -> Result<Self> {
        config.validate()?;
        let metrics = ItemMetrics {
            item_width: config.item_width,
            item_height: config.item_height,
            gap: config.gap,
        };
        let columns = metrics.columns_fitting(available_width, config.number_of_columns);
        let mut engine = Self {
            matrix: GridMatrix::new(0, 0),
            cells: Vec::with_capacity(config.item_count()),
            metrics,
            columns,
            available_width,
            reserved_width: 0.0,
            grid_height: 0.0,
            margin_left: 0.0,
            selected: None,
            config,
        };
        engine.rebuild();
        engine.margin_left = engine
            .metrics
            .centering_margin(engine.effective_width(), engine.columns);
        Ok(engine)
    }

    /// Resize one item to a new span, relocating every displaced item.
    ///
    /// The requested width is clamped to the current column count; columns
    /// trimmed by the clamp are traded for extra rows, so an over-wide
    /// request grows taller instead of silently shrinking. The start column
    /// shifts left as needed to keep the block inside the grid. Every other
    /// item is then re-packed in ascending identity order, which makes the
    /// final layout reproducible for a given starting layout and request.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] (before any mutation) when the
    /// identity is not in the matrix.
    pub fn resize(&mut self, index: u32, span_cols: u32, span_rows: u32) -> Result<Layout> {
        let (row, col) = self
            .matrix
            .find(index)
            .ok_or(GridError::ItemNotFound(index))?;

        let span_x = span_cols.clamp(1, self.columns);
        // Width-for-height trade: whatever the clamp trimmed off the width
        // comes back as extra rows.
        let span_y = span_rows
            .max(1)
            .saturating_add(span_cols.saturating_sub(span_x));
        // Shift left so the block stays inside the grid; the row anchor is
        // untouched.
        let col = if col.saturating_add(span_x) > self.columns {
            self.columns - span_x
        } else {
            col
        };
        // The block may not run past the allocated rows.
        let span_y = span_y.min(self.matrix.rows().saturating_sub(row));

        let block = SlotBlock {
            row,
            col,
            span_x,
            span_y,
        };

        // A resize can ripple positions for every other item, not only the
        // directly overlapped ones: the greedy row-major scan changes which
        // slot is "first free" for all of them. So every other occupied
        // identity re-packs, in ascending order.
        let displaced: BTreeSet<u32> = self
            .matrix
            .occupied_except(index)
            .map(|cell| cell.index)
            .collect();

        self.paint_area(index, &block);
        self.matrix.clear_outside(&block);
        for candidate in displaced {
            if let Some(cell) = self.pack_item(candidate) {
                self.publish(cell);
            }
        }
        self.grid_height = self.metrics.grid_height(self.matrix.occupied_row_count());
        Ok(self.layout())
    }

    /// Expand an item to its declared span and remember it as selected.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] for an identity outside the
    /// configured items; the selection is untouched on failure.
    pub fn activate(&mut self, index: u32) -> Result<Layout> {
        let spec = self.config.item(index)?;
        let layout = self.resize(index, spec.span_cols, spec.span_rows)?;
        self.selected = Some(index);
        Ok(layout)
    }

    /// Shrink the selected item back to a unit cell and clear the
    /// selection. A no-op returning the current layout when nothing is
    /// selected.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] if the selected identity has
    /// left the matrix (caller/engine state divergence).
    pub fn deactivate(&mut self) -> Result<Layout> {
        match self.selected.take() {
            Some(index) => self.resize(index, 1, 1),
            None => Ok(self.layout()),
        }
    }

    /// Apply a width-change signal: recompute the responsive column count,
    /// rebuild and re-register everything on a breakpoint crossing, and
    /// refresh the centering margin.
    ///
    /// The rebuild drops any active selection; expanded items return to
    /// unit span like every other item.
    pub fn on_width_changed(&mut self, available_width: f32) -> Layout {
        self.available_width = available_width;
        let columns = self
            .metrics
            .columns_fitting(self.effective_width(), self.config.number_of_columns);
        if columns != self.columns {
            self.columns = columns;
            self.selected = None;
            self.rebuild();
        }
        self.margin_left = self
            .metrics
            .centering_margin(self.effective_width(), self.columns);
        self.layout()
    }

    /// Width reserved for non-content chrome (e.g. a scrollbar), measured
    /// by the rendering collaborator and deducted from every width signal.
    pub fn set_reserved_width(&mut self, reserved: f32) -> Layout {
        self.reserved_width = reserved.max(0.0);
        self.on_width_changed(self.available_width)
    }

    /// The committed cells, one per item, at position `index - 1`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Snapshot of the committed layout.
    pub fn layout(&self) -> Layout {
        Layout {
            cells: self.cells.clone(),
            grid_height: self.grid_height,
            margin_left: self.margin_left,
            columns: self.columns,
            compact: self.is_compact(),
        }
    }

    /// Total grid height in pixels.
    pub fn grid_height(&self) -> f32 {
        self.grid_height
    }

    /// Total grid width in pixels at the current column count.
    pub fn grid_width(&self) -> f32 {
        self.metrics.grid_width(self.columns)
    }

    /// Margin that centers the grid inside the available width.
    pub fn margin_left(&self) -> f32 {
        self.margin_left
    }

    /// Current responsive column count.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Whether the grid sits at the compact (two-column) breakpoint. The
    /// engine's algorithms are unchanged in compact mode; rendering uses
    /// this to switch width/centering formulas.
    pub fn is_compact(&self) -> bool {
        self.columns == MIN_FIT_COLUMNS
    }

    /// Selected (expanded) item identity, if any.
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Anchor slot of an item: the top-left slot it occupies.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] when the identity is not in the
    /// matrix.
    pub fn item_position(&self, index: u32) -> Result<(u32, u32)> {
        self.matrix
            .find(index)
            .ok_or(GridError::ItemNotFound(index))
    }

    /// The committed anchor cell of an item.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] when the identity is not in the
    /// matrix.
    pub fn cell(&self, index: u32) -> Result<Cell> {
        let (row, col) = self.item_position(index)?;
        self.matrix
            .slot(row, col)
            .copied()
            .ok_or(GridError::ItemNotFound(index))
    }

    fn effective_width(&self) -> f32 {
        (self.available_width - self.reserved_width).max(0.0)
    }

    /// Rows allocated per matrix: a generous bound sized so worst-case
    /// packing always finds free slots.
    fn matrix_rows(&self) -> u32 {
        u32::try_from(self.config.item_count())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.config.number_of_columns)
    }

    /// Discard the matrix, reallocate it at the current column count, and
    /// re-register every item in identity order.
    fn rebuild(&mut self) {
        self.matrix = GridMatrix::new(self.matrix_rows(), self.columns);
        self.cells.clear();
        let count = u32::try_from(self.config.item_count()).unwrap_or(u32::MAX);
        for index in 1..=count {
            if let Some(cell) = self.pack_item(index) {
                self.cells.push(cell);
            }
        }
        self.grid_height = self.metrics.grid_height(self.matrix.occupied_row_count());
    }

    /// Free-space packing: claim the first free slot in row-major order and
    /// derive a unit-span cell for `index` there.
    ///
    /// Exactly one slot is claimed; a displaced item that previously
    /// spanned several cells comes back as a unit cell. Returns `None` when
    /// the matrix has no free slot left, in which case the item keeps its
    /// previously published cell.
    fn pack_item(&mut self, index: u32) -> Option<Cell> {
        let (row, col) = self.matrix.first_free()?;
        let cell = self.metrics.cell(index, row, col, 1, 1);
        self.matrix.set(row, col, cell);
        Some(cell)
    }

    /// Area painting: write span-aware geometry into every slot of the
    /// block. The anchor (top-left) cell is published immediately so the
    /// resized item's own geometry is visible before the reflow completes.
    fn paint_area(&mut self, index: u32, block: &SlotBlock) {
        let mut anchor = true;
        for (row, col) in block.slots() {
            let cell = self
                .metrics
                .cell(index, row, col, block.span_x, block.span_y);
            self.matrix.set(row, col, cell);
            if anchor {
                self.publish(cell);
                anchor = false;
            }
        }
    }

    /// Publish a cell to the ordered list at `index - 1`.
    fn publish(&mut self, cell: Cell) {
        if let Some(slot) = (cell.index as usize)
            .checked_sub(1)
            .and_then(|i| self.cells.get_mut(i))
        {
            *slot = cell;
        }
    }
}
