//! Visible window computation.
//!
//! [`WindowPlan::compute`] is a pure function of the layout metrics, the item
//! count and two lengths read from the host. Calling it again with the same
//! inputs always yields the same plan, which is what lets the list converge
//! after arbitrary scroll jumps.

use std::ops::Range;

use crate::config::LayoutMetrics;
use crate::host::LeadingSpacer;

/// Everything one content update needs to know about the visible slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlan {
    /// Whole rows scrolled past above the viewport.
    pub culled_items: usize,
    /// Rows needed to cover the viewport height.
    pub items_in_viewport: usize,
    /// Size of the active view set.
    pub views_needed: usize,
    /// First visible index (inclusive).
    pub first_visible: usize,
    /// Last visible index (exclusive).
    pub last_visible: usize,
    /// Leading spacer standing in for the culled rows.
    pub spacer: LeadingSpacer,
}

impl WindowPlan {
    /// Computes the plan for `item_count` rows.
    ///
    /// `culled_extent` is the content height above the viewport's top edge and
    /// `viewport_height` the visible height. Negative or non-finite lengths
    /// degrade to zero rows.
    pub fn compute(
        metrics: &LayoutMetrics,
        item_count: usize,
        culled_extent: f32,
        viewport_height: f32,
    ) -> Self {
        let spaced = metrics.spaced_item_height();

        // Float to int casts saturate and map NaN to zero.
        let culled_items = (culled_extent / spaced).floor() as usize;
        let items_in_viewport = (viewport_height / spaced).ceil() as usize;

        let space = culled_items as f32 * spaced - metrics.spacing();

        // One row more than the viewport holds, so no blank row shows while
        // the content is between two bindings.
        let views_needed = items_in_viewport
            .saturating_add(1)
            .min(item_count.saturating_sub(culled_items))
            .min(item_count);

        Self {
            culled_items,
            items_in_viewport,
            views_needed,
            first_visible: culled_items.min(item_count),
            last_visible: culled_items.saturating_add(items_in_viewport).min(item_count),
            spacer: LeadingSpacer::for_space(space),
        }
    }

    /// The visible index range.
    pub fn visible_range(&self) -> Range<usize> {
        self.first_visible..self.last_visible
    }

    /// Indices bound to the active views, in layout order.
    ///
    /// This may extend one past [`visible_range`](Self::visible_range) because
    /// of the extra view.
    pub fn bound_range(&self) -> Range<usize> {
        self.first_visible..self.first_visible + self.views_needed
    }
}
