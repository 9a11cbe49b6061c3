//! List configuration and validated layout metrics.
//!
//! [`ListConfig`] is the owner-facing, serializable description of a list.
//! [`LayoutMetrics`] is what the engine actually computes with: it combines
//! the config with the row height reported by the view factory and is only
//! constructed from valid values.
//!
//! # Example
//!
//! ```
//! use pooled_list::{ListConfig, ListMode, LayoutMetrics};
//!
//! let config = ListConfig::new()
//!     .with_mode(ListMode::Paged)
//!     .with_spacing(10.0)
//!     .with_pool_capacity(6);
//!
//! let metrics = LayoutMetrics::from_config(&config, 50.0).unwrap();
//! assert_eq!(metrics.spaced_item_height(), 60.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};

/// Default number of idle views created when a list is constructed.
pub const DEFAULT_POOL_CAPACITY: usize = 10;

/// How the list positions its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Free scrolling over the whole collection.
    #[default]
    Continuous,
    /// Scrolling in viewport-sized pages with page navigation.
    Paged,
}

/// Padding above the first and below the last row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Space above the first row.
    pub top: f32,
    /// Space below the last row.
    pub bottom: f32,
}

impl Padding {
    /// Create padding with explicit top and bottom values.
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Owner-facing configuration of a pooled list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Continuous or paged positioning.
    pub mode: ListMode,
    /// Idle views created up front.
    pub pool_capacity: usize,
    /// Vertical gap between consecutive rows.
    pub spacing: f32,
    /// Content padding.
    pub padding: Padding,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            mode: ListMode::Continuous,
            pool_capacity: DEFAULT_POOL_CAPACITY,
            spacing: 0.0,
            padding: Padding::default(),
        }
    }
}

impl ListConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the positioning mode using builder pattern.
    pub fn with_mode(mut self, mode: ListMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the pool capacity using builder pattern.
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Sets the spacing using builder pattern.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the padding using builder pattern.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Whether paging is enabled.
    pub fn is_paged(&self) -> bool {
        self.mode == ListMode::Paged
    }

    /// Checks the values that do not depend on the view factory.
    pub fn validate(&self) -> Result<()> {
        if self.pool_capacity == 0 {
            return Err(ListError::ZeroPoolCapacity);
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ListError::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        for (edge, value) in [("top", self.padding.top), ("bottom", self.padding.bottom)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ListError::invalid_padding(edge, value));
            }
        }
        Ok(())
    }
}

/// Validated per-row layout metrics.
///
/// The viewport height is not part of the metrics; it is read from the host
/// on every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    item_height: f32,
    spacing: f32,
    padding: Padding,
}

impl LayoutMetrics {
    /// Creates metrics, rejecting unusable values.
    pub fn new(item_height: f32, spacing: f32, padding: Padding) -> Result<Self> {
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(ListError::invalid_item_height(item_height));
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(ListError::InvalidSpacing { spacing });
        }
        for (edge, value) in [("top", padding.top), ("bottom", padding.bottom)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ListError::invalid_padding(edge, value));
            }
        }
        Ok(Self {
            item_height,
            spacing,
            padding,
        })
    }

    /// Creates metrics from a config and the factory's row height.
    pub fn from_config(config: &ListConfig, item_height: f32) -> Result<Self> {
        config.validate()?;
        Self::new(item_height, config.spacing, config.padding)
    }

    /// Height of a single row.
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Gap between rows.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Content padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Row height plus spacing: the repeating unit of scroll distance.
    pub fn spaced_item_height(&self) -> f32 {
        self.item_height + self.spacing
    }

    /// Height of the content holding `item_count` rows back to back.
    pub fn content_height(&self, item_count: usize) -> f32 {
        let rows = self.item_height * item_count as f32;
        let gaps = self.spacing * item_count.saturating_sub(1) as f32;
        rows + gaps + self.padding.vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ListConfig::new()
            .with_mode(ListMode::Paged)
            .with_pool_capacity(4)
            .with_spacing(8.0)
            .with_padding(Padding::new(2.0, 3.0));

        assert!(config.is_paged());
        assert_eq!(config.pool_capacity, 4);
        assert_eq!(config.spacing, 8.0);
        assert_eq!(config.padding.vertical(), 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            ListConfig::new().with_pool_capacity(0).validate(),
            Err(ListError::ZeroPoolCapacity)
        );
        assert_eq!(
            ListConfig::new().with_spacing(-1.0).validate(),
            Err(ListError::InvalidSpacing { spacing: -1.0 })
        );
        assert!(matches!(
            ListConfig::new()
                .with_padding(Padding::new(0.0, f32::NAN))
                .validate(),
            Err(ListError::InvalidPadding { edge: "bottom", .. })
        ));
    }

    #[test]
    fn test_metrics_reject_bad_item_height() {
        for height in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                LayoutMetrics::new(height, 0.0, Padding::default()),
                Err(ListError::InvalidItemHeight { .. })
            ));
        }
    }

    #[test]
    fn test_content_height() {
        let metrics = LayoutMetrics::new(50.0, 10.0, Padding::new(5.0, 5.0)).unwrap();
        assert_eq!(metrics.spaced_item_height(), 60.0);
        assert_eq!(metrics.content_height(0), 10.0);
        assert_eq!(metrics.content_height(1), 60.0);
        assert_eq!(metrics.content_height(23), 23.0 * 50.0 + 22.0 * 10.0 + 10.0);
    }

    #[test]
    fn test_config_serde() {
        let config: ListConfig =
            serde_json::from_str(r#"{"mode":"paged","spacing":10.0}"#).unwrap();
        assert_eq!(config.mode, ListMode::Paged);
        assert_eq!(config.spacing, 10.0);
        assert_eq!(config.pool_capacity, DEFAULT_POOL_CAPACITY);

        let json = serde_json::to_string(&config).unwrap();
        let back: ListConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
