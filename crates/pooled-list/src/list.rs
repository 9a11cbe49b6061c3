//! The pooled, virtualized list.
//!
//! [`PooledList`] shows an arbitrarily long collection through a handful of
//! recycled views. Only the rows intersecting the viewport (plus one) have a
//! view; the rows scrolled past above the viewport are stood in for by a
//! single leading spacer in the host's layout.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pooled_list::{ListConfig, ListMode, PooledList};
//!
//! let config = ListConfig::new().with_mode(ListMode::Paged).with_spacing(10.0);
//! let mut list = PooledList::new(config, Arc::new(RowFactory), host)?;
//!
//! list.item_clicked.connect(|ingredient| {
//!     println!("Clicked {}", ingredient.name);
//! });
//! list.page_changed.connect(|&(page, count)| {
//!     println!("Page {page} of {count}");
//! });
//!
//! list.set_items(ingredients);
//!
//! // Wire the host's scroll notification to the list.
//! list.on_scroll_changed();
//! list.jump_to_next_page();
//! ```

use std::ops::Range;
use std::sync::Arc;

use pooled_list_core::logging::targets;
use pooled_list_core::{PerfSpan, Signal};

use crate::config::{LayoutMetrics, ListConfig, ListMode};
use crate::error::Result;
use crate::host::{culled_extent, ScrollHost};
use crate::paging::PagingController;
use crate::pool::ViewPool;
use crate::router::ClickRouter;
use crate::view::{Container, ItemView, RecycledView, ViewFactory};
use crate::window::WindowPlan;

/// A list that virtualizes its rows over a pool of reusable views.
///
/// # Type Parameters
///
/// - `M`: the model type displayed by each row
/// - `V`: the row view type
/// - `H`: the scroll/layout host the list is embedded in
///
/// # Signals
///
/// - `item_clicked(M)`: Emitted with the bound model when an active row is clicked
/// - `page_changed((current_page, page_count))`: Emitted in paged mode when the
///   collection is assigned and whenever the current page changes
///
/// # Update Cycle
///
/// All operations run synchronously and take `&mut self`; a model binding can
/// therefore never trigger a nested update. Owners wire the host's scroll
/// notification to [`on_scroll_changed`](Self::on_scroll_changed) and call
/// [`force_update`](Self::force_update) after editing visible models in place.
pub struct PooledList<M, V, H> {
    config: ListConfig,
    metrics: LayoutMetrics,
    host: H,

    // Views
    pool: ViewPool<V>,
    active: Vec<RecycledView<V>>,
    router: ClickRouter<M>,

    // Data
    items: Vec<M>,

    // Window state
    plan: Option<WindowPlan>,
    bound_range: Option<Range<usize>>,
    bind_passes: u64,

    // Paging
    paging: Option<PagingController>,

    // Signals
    /// Emitted when an active row is clicked, carrying its bound model.
    pub item_clicked: Arc<Signal<M>>,
    /// Emitted in paged mode with `(current_page, page_count)`.
    pub page_changed: Signal<(usize, usize)>,
}

impl<M, V, H> PooledList<M, V, H>
where
    M: Clone + Send + 'static,
    V: ItemView<M>,
    H: ScrollHost,
{
    /// Creates an empty list.
    ///
    /// Fails if the config is invalid or the factory reports an unusable row
    /// height. The pool is prewarmed with `config.pool_capacity` views.
    pub fn new(config: ListConfig, factory: Arc<dyn ViewFactory<V>>, host: H) -> Result<Self> {
        let metrics = LayoutMetrics::from_config(&config, factory.item_height())?;
        let pool = ViewPool::new(factory, config.pool_capacity);
        let item_clicked = Arc::new(Signal::new());
        let paging = config.is_paged().then(PagingController::new);

        tracing::debug!(
            target: targets::ENGINE,
            mode = ?config.mode,
            item_height = metrics.item_height(),
            spacing = metrics.spacing(),
            "pooled list created"
        );

        Ok(Self {
            router: ClickRouter::new(Arc::clone(&item_clicked)),
            config,
            metrics,
            host,
            pool,
            active: Vec::new(),
            items: Vec::new(),
            plan: None,
            bound_range: None,
            bind_passes: 0,
            paging,
            item_clicked,
            page_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// The displayed collection.
    pub fn items(&self) -> &[M] {
        &self.items
    }

    /// Mutable access to the models, for in-place edits.
    ///
    /// The collection length cannot change this way. Call
    /// [`force_update`](Self::force_update) afterwards so visible rows refresh.
    pub fn items_mut(&mut self) -> &mut [M] {
        &mut self.items
    }

    /// Number of items in the collection.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Replaces the collection and re-virtualizes from the top.
    pub fn set_items(&mut self, items: impl Into<Vec<M>>) {
        let _span = PerfSpan::new("set_items");

        self.items = items.into();
        self.plan = None;
        self.bound_range = None;

        let item_count = self.items.len();
        let content_height = match &mut self.paging {
            Some(paging) => paging.reset(
                &self.metrics,
                item_count,
                self.host.viewport_rect().height(),
                &self.page_changed,
            ),
            None => self.metrics.content_height(item_count),
        };

        tracing::debug!(target: targets::ENGINE, item_count, content_height, "items set");

        self.host.set_content_height(content_height);
        self.host.set_scroll_offset(0.0);
        self.update_content(true);
    }

    // =========================================================================
    // Content updates
    // =========================================================================

    /// Recomputes the visible window and rebinds views if it changed.
    ///
    /// With `force`, every active view is rebound even if the visible range is
    /// unchanged. Given the same geometry and collection, calling this again
    /// binds nothing.
    pub fn update_content(&mut self, force: bool) {
        let _span = PerfSpan::new("update_content");

        let viewport = self.host.viewport_rect();
        let content = self.host.content_rect();
        let plan = WindowPlan::compute(
            &self.metrics,
            self.items.len(),
            culled_extent(viewport, content),
            viewport.height(),
        );

        self.host.update_leading_spacer(plan.spacer);
        let grew = self.resize_active(plan.views_needed);

        let visible = plan.visible_range();
        let range_changed = self.bound_range.as_ref() != Some(&visible);
        if force || range_changed || grew {
            tracing::trace!(
                target: targets::ENGINE,
                first = plan.first_visible,
                last = plan.last_visible,
                culled = plan.culled_items,
                views = plan.views_needed,
                force,
                "visible window bound"
            );
            self.bind_active(plan.first_visible);
            self.bound_range = Some(visible);
        }
        self.plan = Some(plan);

        if let Some(paging) = &self.paging {
            let max_scroll_offset = (content.height() - viewport.height()).max(0.0);
            paging.sync_current_page(
                &self.metrics,
                self.host.scroll_offset(),
                max_scroll_offset,
                &self.page_changed,
            );
        }
    }

    /// Handles a scroll position change reported by the host.
    pub fn on_scroll_changed(&mut self) {
        self.update_content(false);
    }

    /// Rebinds every visible row, e.g. after a model was edited in place.
    pub fn force_update(&mut self) {
        self.update_content(true);
    }

    /// Grows or shrinks the active set; returns whether views were added.
    fn resize_active(&mut self, needed: usize) -> bool {
        if self.active.len() > needed {
            for mut slot in self.active.drain(needed..) {
                self.router.detach(&mut slot);
                self.pool.release(slot);
            }
            return false;
        }

        let grew = self.active.len() < needed;
        while self.active.len() < needed {
            let mut slot = self.pool.acquire(Container::Content);
            self.router.attach(&mut slot);
            self.active.push(slot);
        }
        grew
    }

    /// Binds active views to consecutive models starting at `first`.
    fn bind_active(&mut self, first: usize) {
        if self.active.is_empty() {
            return;
        }
        let models = self.items.get(first..).unwrap_or_default();
        for (slot, model) in self.active.iter_mut().zip(models) {
            slot.view_mut().set_model(model.clone());
        }
        self.bind_passes += 1;
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Scrolls to the start of page `page` (1-based), clamped to valid pages.
    ///
    /// Does nothing in continuous mode.
    pub fn jump_to_page(&mut self, page: i64) {
        let Some(paging) = &self.paging else {
            tracing::debug!(target: targets::PAGING, page, "page jump ignored, list is not paged");
            return;
        };

        let layout = paging.layout();
        let target = layout.clamp_page(page);
        let offset = layout.page_offset(&self.metrics, target);
        tracing::trace!(target: targets::PAGING, requested = page, target, offset, "jumping to page");

        self.host.set_scroll_offset(offset);
        self.on_scroll_changed();
    }

    /// Scrolls to the first page.
    pub fn jump_to_first_page(&mut self) {
        self.jump_to_page(1);
    }

    /// Scrolls to the last page.
    pub fn jump_to_last_page(&mut self) {
        let last = self.page_count().unwrap_or(1);
        self.jump_to_page(last as i64);
    }

    /// Scrolls to the page after the current one.
    pub fn jump_to_next_page(&mut self) {
        let current = self.current_page().unwrap_or(1);
        self.jump_to_page(current as i64 + 1);
    }

    /// Scrolls to the page before the current one.
    pub fn jump_to_previous_page(&mut self) {
        let current = self.current_page().unwrap_or(1);
        self.jump_to_page(current as i64 - 1);
    }

    /// The current page in paged mode.
    pub fn current_page(&self) -> Option<usize> {
        self.paging.as_ref().map(PagingController::current_page)
    }

    /// The page count in paged mode.
    pub fn page_count(&self) -> Option<usize> {
        self.paging.as_ref().map(PagingController::page_count)
    }

    /// Rows per page in paged mode.
    pub fn page_size(&self) -> Option<usize> {
        self.paging.as_ref().map(PagingController::page_size)
    }

    /// The paging controller in paged mode.
    pub fn paging(&self) -> Option<&PagingController> {
        self.paging.as_ref()
    }

    // =========================================================================
    // Window state
    // =========================================================================

    /// The visible index range; empty before the first update.
    pub fn visible_range(&self) -> Range<usize> {
        self.plan.as_ref().map_or(0..0, WindowPlan::visible_range)
    }

    /// First visible index (inclusive).
    pub fn first_visible_index(&self) -> usize {
        self.visible_range().start
    }

    /// Last visible index (exclusive).
    pub fn last_visible_index(&self) -> usize {
        self.visible_range().end
    }

    /// Rows scrolled past above the viewport.
    pub fn culled_items(&self) -> usize {
        self.plan.as_ref().map_or(0, |plan| plan.culled_items)
    }

    /// Rows needed to cover the viewport.
    pub fn items_in_viewport(&self) -> usize {
        self.plan.as_ref().map_or(0, |plan| plan.items_in_viewport)
    }

    /// The window computed by the last update.
    pub fn window_plan(&self) -> Option<&WindowPlan> {
        self.plan.as_ref()
    }

    /// Number of views currently showing rows.
    pub fn active_view_count(&self) -> usize {
        self.active.len()
    }

    /// The active views, in layout order.
    pub fn active_views(&self) -> impl Iterator<Item = &V> {
        self.active.iter().map(RecycledView::view)
    }

    /// Number of binding passes performed so far.
    ///
    /// A pass binds every active view once; updates that leave the visible
    /// range untouched do not count.
    pub fn bind_passes(&self) -> u64 {
        self.bind_passes
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// The view pool.
    pub fn pool(&self) -> &ViewPool<V> {
        &self.pool
    }

    /// The scroll/layout host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to resize the viewport.
    ///
    /// Follow geometry changes with [`on_scroll_changed`](Self::on_scroll_changed).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The configuration the list was created with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// The positioning mode.
    pub fn mode(&self) -> ListMode {
        self.config.mode
    }

    /// The validated layout metrics.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }
}
