//! Grid configuration and fail-fast validation.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Fewest columns a grid may be configured with.
pub const MIN_COLUMNS: u32 = 3;

/// Declared span of a single grid item, in whole grid cells.
///
/// Items are laid out as unit cells until activated; the declared span is
/// what the item expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    /// Columns the item spans when expanded.
    pub span_cols: u32,
    /// Rows the item spans when expanded.
    pub span_rows: u32,
}

/// Grid construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Maximum number of columns the grid may use. The responsive policy
    /// never exceeds this, however wide the viewport gets.
    pub number_of_columns: u32,
    /// Width of a unit (1x1) item in pixels.
    pub item_width: f32,
    /// Height of a unit item in pixels.
    pub item_height: f32,
    /// Gap between adjacent items in pixels.
    pub gap: f32,
    /// One spec per item, in declaration order. The item at position `i`
    /// gets the stable identity `i + 1`.
    pub items: Vec<ItemSpec>,
}

impl GridConfig {
    /// Check every construction-time constraint.
    ///
    /// Validation precedes all engine state: an invalid config never
    /// produces a partial engine.
    ///
    /// # Errors
    /// Returns the first violated constraint: negative gap, too few
    /// columns, no items, or an item span below 1.
    pub fn validate(&self) -> Result<()> {
        if self.gap < 0.0 {
            return Err(GridError::NegativeGap(self.gap));
        }
        if self.number_of_columns < MIN_COLUMNS {
            return Err(GridError::TooFewColumns {
                min: MIN_COLUMNS,
                got: self.number_of_columns,
            });
        }
        if self.items.is_empty() {
            return Err(GridError::NoItems);
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.span_cols < 1 || item.span_rows < 1 {
                return Err(GridError::InvalidSpan {
                    index: u32::try_from(i + 1).unwrap_or(u32::MAX),
                    span_cols: item.span_cols,
                    span_rows: item.span_rows,
                });
            }
        }
        Ok(())
    }

    /// Number of items in the grid.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Declared span for a 1-based item identity.
    ///
    /// # Errors
    /// Returns [`GridError::ItemNotFound`] for an identity outside `1..=N`.
    pub fn item(&self, index: u32) -> Result<ItemSpec> {
        (index as usize)
            .checked_sub(1)
            .and_then(|i| self.items.get(i))
            .copied()
            .ok_or(GridError::ItemNotFound(index))
    }
}
