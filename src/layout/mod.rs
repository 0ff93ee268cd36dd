//! Grid occupancy and reflow engine.
//!
//! This module is the layout core:
//! - Pure, gap-aware pixel geometry derived from slot coordinates and spans
//! - The occupancy matrix tracking which item holds which slot
//! - Free-space packing, area painting, and the resize/reflow coordinator
//! - The responsive column policy with full-grid rebuilds on breakpoint
//!   crossings

mod engine;
mod geometry;
mod matrix;

pub use engine::{GridEngine, Layout};
pub use geometry::{ItemMetrics, MIN_FIT_COLUMNS};
pub use matrix::{GridMatrix, SlotBlock};
