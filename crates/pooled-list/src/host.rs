//! The scroll/layout host a list is embedded in.
//!
//! The host owns the viewport, the scrollable content rectangle and a leading
//! spacer element placed before the first active view. The engine reads
//! geometry from it and writes back the content height, the scroll offset and
//! the spacer size; the host's own layout then stacks the active views below
//! the spacer.

use pooled_list_core::Rect;

/// Size and layout participation of the leading spacer element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeadingSpacer {
    /// Preferred and minimum height of the spacer.
    pub extent: f32,
    /// Whether the spacer takes part in layout.
    ///
    /// A spacer that does not participate adds no extra spacing before the
    /// first view.
    pub participates: bool,
}

impl LeadingSpacer {
    /// A spacer removed from layout.
    pub const NONE: Self = Self {
        extent: 0.0,
        participates: false,
    };

    /// Builds the spacer for a requested space; non-positive space removes it.
    pub fn for_space(space: f32) -> Self {
        if space > 0.0 {
            Self {
                extent: space,
                participates: true,
            }
        } else {
            Self::NONE
        }
    }
}

/// Layout collaborator the list is embedded in.
///
/// Rectangles are reported in one shared, y-down coordinate space. How the
/// host maps its scroll offset onto the content rectangle (anchors, pivots,
/// elastic overscroll) is its own business: the engine derives the culled
/// extent from the two rectangles only.
pub trait ScrollHost {
    /// The visible viewport.
    fn viewport_rect(&self) -> Rect;

    /// The scrollable content, positioned according to the scroll offset.
    fn content_rect(&self) -> Rect;

    /// Resizes the content vertically.
    fn set_content_height(&mut self, height: f32);

    /// Distance the content is scrolled down from its top position.
    fn scroll_offset(&self) -> f32;

    /// Moves the content; `0.0` shows the top.
    fn set_scroll_offset(&mut self, offset: f32);

    /// Applies the leading spacer size.
    fn update_leading_spacer(&mut self, spacer: LeadingSpacer);
}

/// Content height scrolled past above the viewport's top edge.
///
/// Negative distances (overscroll past the top) count as zero.
pub fn culled_extent(viewport: Rect, content: Rect) -> f32 {
    (viewport.top() - content.top()).max(0.0)
}
