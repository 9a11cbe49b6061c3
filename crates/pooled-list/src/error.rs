//! Error types for list setup.
//!
//! Only construction can fail. Once a list exists, every update clamps its
//! inputs to the nearest valid state instead of returning an error.

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur while configuring a pooled list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListError {
    /// The row height reported by the view factory is unusable.
    #[error("Invalid item height {height}: must be finite and greater than zero")]
    InvalidItemHeight { height: f32 },

    /// The spacing between rows is negative or not finite.
    #[error("Invalid spacing {spacing}: must be finite and not negative")]
    InvalidSpacing { spacing: f32 },

    /// A padding edge is negative or not finite.
    #[error("Invalid {edge} padding {value}: must be finite and not negative")]
    InvalidPadding { edge: &'static str, value: f32 },

    /// The view pool must be able to hold at least one idle view.
    #[error("Pool capacity must be at least 1")]
    ZeroPoolCapacity,
}

impl ListError {
    /// Create an item height error.
    pub fn invalid_item_height(height: f32) -> Self {
        Self::InvalidItemHeight { height }
    }

    /// Create a padding error for the given edge ("top" or "bottom").
    pub fn invalid_padding(edge: &'static str, value: f32) -> Self {
        Self::InvalidPadding { edge, value }
    }
}
