//! Structured error types for gridflow.
//!
//! Every failure is either a construction-time configuration error or a
//! lookup for an identity the matrix does not hold. Both are programming
//! errors on the caller's side; nothing here is retryable.

/// All errors that can occur while building or mutating a grid layout.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Grid configured with fewer columns than the supported minimum.
    #[error("Number of columns in a grid must be minimum {min}, got {got}")]
    TooFewColumns {
        /// The configured minimum.
        min: u32,
        /// The rejected value.
        got: u32,
    },

    /// Negative gap between items.
    #[error("Gap in a grid must be minimum 0, got {0}")]
    NegativeGap(f32),

    /// Item declared with a zero column or row span.
    #[error("Span of a grid item must be minimum 1, got {span_cols}x{span_rows} for item {index}")]
    InvalidSpan {
        /// 1-based identity of the offending item.
        index: u32,
        /// Declared column span.
        span_cols: u32,
        /// Declared row span.
        span_rows: u32,
    },

    /// Grid configured without any items.
    #[error("A grid must contain at least one item")]
    NoItems,

    /// Lookup for an identity that is not present in the matrix.
    #[error("No cell with index {0} found")]
    ItemNotFound(u32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
