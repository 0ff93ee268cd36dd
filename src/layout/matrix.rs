//! The occupancy matrix: which item occupies which slot.

use crate::cell::Cell;

/// A rectangular block of slots, the footprint of a spanning item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBlock {
    /// Top row of the block.
    pub row: u32,
    /// Leftmost column of the block.
    pub col: u32,
    /// Columns covered.
    pub span_x: u32,
    /// Rows covered.
    pub span_y: u32,
}

impl SlotBlock {
    /// Whether the block covers a slot.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.row
            && row < self.row.saturating_add(self.span_y)
            && col >= self.col
            && col < self.col.saturating_add(self.span_x)
    }

    /// Covered slots in row-major order; the first is the anchor.
    pub fn slots(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let rows = self.row..self.row.saturating_add(self.span_y);
        rows.flat_map(move |row| {
            (self.col..self.col.saturating_add(self.span_x)).map(move |col| (row, col))
        })
    }
}

/// Row-major storage of `rows x cols` slots; the single source of truth for
/// what occupies where.
///
/// A free slot holds `None`. A spanning item stores one cell per covered
/// slot, all carrying its index, so any slot answers "who owns me" without
/// chasing an anchor. Matrices are discarded and rebuilt on a column-count
/// change, never grown in place.
#[derive(Debug, Clone)]
pub struct GridMatrix {
    rows: u32,
    cols: u32,
    slots: Vec<Option<Cell>>,
}

impl GridMatrix {
    /// Allocate an all-free matrix.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows as usize * cols as usize],
        }
    }

    /// Allocated row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Allocated column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn offset(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.rows && col < self.cols)
            .then(|| row as usize * self.cols as usize + col as usize)
    }

    fn coords(&self, offset: usize) -> (u32, u32) {
        let cols = self.cols.max(1) as usize;
        (
            u32::try_from(offset / cols).unwrap_or(u32::MAX),
            u32::try_from(offset % cols).unwrap_or(u32::MAX),
        )
    }

    /// The cell stored at a slot; `None` when free or out of bounds.
    pub fn slot(&self, row: u32, col: u32) -> Option<&Cell> {
        self.offset(row, col)
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
    }

    /// Store a cell at a slot; writes outside the allocated grid are
    /// dropped.
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        if let Some(i) = self.offset(row, col) {
            if let Some(slot) = self.slots.get_mut(i) {
                *slot = Some(cell);
            }
        }
    }

    /// First free slot in row-major order — the canonical scan order behind
    /// every packing decision.
    pub fn first_free(&self) -> Option<(u32, u32)> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(|i| self.coords(i))
    }

    /// First slot owned by `index` in row-major order: a spanning item's
    /// top-left anchor.
    pub fn find(&self, index: u32) -> Option<(u32, u32)> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|cell| cell.index == index))
            .map(|i| self.coords(i))
    }

    /// Occupied cells in row-major discovery order.
    pub fn occupied(&self) -> impl Iterator<Item = &Cell> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Occupied cells not owned by `index`, in row-major discovery order.
    pub fn occupied_except(&self, index: u32) -> impl Iterator<Item = &Cell> {
        self.occupied().filter(move |cell| cell.index != index)
    }

    /// Free every slot outside the block. Run after a resize paints its
    /// block, so re-packing starts from a matrix holding exactly the
    /// resized item.
    pub fn clear_outside(&mut self, block: &SlotBlock) {
        let cols = self.cols.max(1) as usize;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let row = u32::try_from(i / cols).unwrap_or(u32::MAX);
            let col = u32::try_from(i % cols).unwrap_or(u32::MAX);
            if !block.contains(row, col) {
                *slot = None;
            }
        }
    }

    /// Rows containing at least one occupied slot; feeds the grid-height
    /// computation.
    pub fn occupied_row_count(&self) -> u32 {
        if self.cols == 0 {
            return 0;
        }
        let count = self
            .slots
            .chunks(self.cols as usize)
            .filter(|row| row.iter().any(Option::is_some))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
