//! Discrete page navigation on top of the scroll position.
//!
//! A page is as many whole rows as fit in the viewport. The content is sized
//! to a whole number of pages, padding the last partial page, so that page
//! `n` starts at scroll offset `(n - 1) * page_height`. When the viewport is
//! not a whole number of rows the host cannot scroll that far for the last
//! page; the end of the scroll range then counts as the last page.

use pooled_list_core::logging::targets;
use pooled_list_core::{Property, Signal};

use crate::config::LayoutMetrics;

/// Distance from the end of the scroll range still counted as the end.
const SCROLL_END_TOLERANCE: f32 = 0.5;

/// Page geometry derived when a collection is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    /// Rows per page.
    pub page_size: usize,
    /// Pages needed for the collection, the last one possibly partial.
    pub page_count: usize,
}

impl PageLayout {
    /// Derives the page layout for `item_count` rows in a viewport.
    ///
    /// A viewport shorter than one row gives a page size of zero and no
    /// pages.
    pub fn compute(metrics: &LayoutMetrics, item_count: usize, viewport_height: f32) -> Self {
        let page_size = (viewport_height / metrics.spaced_item_height()).floor() as usize;
        let page_count = if page_size == 0 {
            0
        } else {
            item_count.div_ceil(page_size)
        };
        Self {
            page_size,
            page_count,
        }
    }

    /// Scroll distance covered by one page.
    pub fn page_height(&self, metrics: &LayoutMetrics) -> f32 {
        self.page_size as f32 * metrics.spaced_item_height()
    }

    /// Content height holding every page in full.
    pub fn content_height(&self, metrics: &LayoutMetrics) -> f32 {
        self.page_count as f32 * self.page_height(metrics)
    }

    /// Highest valid page number; at least 1 even without pages.
    pub fn last_page(&self) -> usize {
        self.page_count.max(1)
    }

    /// Clamps any requested page number into `1..=last_page()`.
    pub fn clamp_page(&self, page: i64) -> usize {
        let last = self.last_page() as i64;
        page.clamp(1, last) as usize
    }

    /// Scroll offset at which `page` starts.
    pub fn page_offset(&self, metrics: &LayoutMetrics, page: usize) -> f32 {
        page.saturating_sub(1) as f32 * self.page_height(metrics)
    }

    /// The page shown at `scroll_offset`.
    ///
    /// The fractional page position is snapped to the nearest tenth before
    /// flooring, so an offset within a tenth of a page below a boundary
    /// already counts as the next page. An offset at `max_scroll_offset`
    /// shows the last page: when the viewport is not a whole number of rows
    /// the host stops short of the last page's start. The result is clamped
    /// into `1..=last_page()`.
    pub fn page_at(
        &self,
        metrics: &LayoutMetrics,
        scroll_offset: f32,
        max_scroll_offset: f32,
    ) -> usize {
        let page_height = self.page_height(metrics);
        if page_height <= 0.0 || !scroll_offset.is_finite() {
            return 1;
        }
        if max_scroll_offset > 0.0 && scroll_offset >= max_scroll_offset - SCROLL_END_TOLERANCE {
            return self.last_page();
        }
        let position = ((scroll_offset / page_height) * 10.0).round() / 10.0;
        let page = position.floor() as i64 + 1;
        self.clamp_page(page)
    }
}

/// Paging state of a list in [`ListMode::Paged`](crate::ListMode::Paged).
///
/// # Signals
///
/// The owner-facing `page_changed` signal lives on the list; the controller
/// emits through it.
#[derive(Debug)]
pub struct PagingController {
    layout: PageLayout,
    current_page: Property<usize>,
}

impl Default for PagingController {
    fn default() -> Self {
        Self::new()
    }
}

impl PagingController {
    /// Creates a controller with no pages, showing page 1.
    pub fn new() -> Self {
        Self {
            layout: PageLayout::default(),
            current_page: Property::new(1),
        }
    }

    /// Current page geometry.
    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// 1-based number of the page currently shown.
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.layout.page_count
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.layout.page_size
    }

    /// Recomputes page geometry for a new collection and resets to page 1.
    ///
    /// Always notifies, since the page count may have changed. Returns the
    /// content height to apply.
    pub(crate) fn reset(
        &mut self,
        metrics: &LayoutMetrics,
        item_count: usize,
        viewport_height: f32,
        page_changed: &Signal<(usize, usize)>,
    ) -> f32 {
        self.layout = PageLayout::compute(metrics, item_count, viewport_height);
        self.current_page.set_silent(1);

        tracing::debug!(
            target: targets::PAGING,
            page_size = self.layout.page_size,
            page_count = self.layout.page_count,
            "paging reset"
        );
        page_changed.emit((1, self.layout.page_count));

        self.layout.content_height(metrics)
    }

    /// Re-derives the current page from the scroll offset, notifying on change.
    pub(crate) fn sync_current_page(
        &self,
        metrics: &LayoutMetrics,
        scroll_offset: f32,
        max_scroll_offset: f32,
        page_changed: &Signal<(usize, usize)>,
    ) {
        let page = self.layout.page_at(metrics, scroll_offset, max_scroll_offset);
        if self.current_page.set(page) {
            tracing::debug!(
                target: targets::PAGING,
                page,
                page_count = self.layout.page_count,
                "current page changed"
            );
            page_changed.emit((page, self.layout.page_count));
        }
    }
}

static_assertions::assert_impl_all!(PagingController: Send, Sync);
