//! Shared mocks for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pooled_list::{
    Container, ItemView, LeadingSpacer, ListConfig, PooledList, PooledView, Rect, ScrollHost,
    Signal, ViewFactory,
};

pub const ITEM_HEIGHT: f32 = 50.0;
pub const SPACING: f32 = 10.0;
pub const VIEWPORT_HEIGHT: f32 = 200.0;

pub type TestList = PooledList<String, MockView, MockHost>;

/// Installs a subscriber once so `RUST_LOG` works while debugging tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A row view recording its state for assertions.
pub struct MockView {
    pub model: Option<String>,
    pub active: bool,
    pub parent: Container,
    pub clicked: Signal<String>,
    binds: Arc<AtomicUsize>,
}

impl MockView {
    /// Simulates a click; inactive or unbound views ignore it.
    pub fn click(&self) {
        if !self.active {
            return;
        }
        if let Some(model) = &self.model {
            self.clicked.emit(model.clone());
        }
    }
}

impl PooledView for MockView {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_parent(&mut self, parent: Container) {
        self.parent = parent;
    }

    fn parent(&self) -> Container {
        self.parent
    }
}

impl ItemView<String> for MockView {
    fn set_model(&mut self, model: String) {
        self.binds.fetch_add(1, Ordering::SeqCst);
        self.model = Some(model);
    }

    fn model(&self) -> Option<&String> {
        self.model.as_ref()
    }

    fn clicked(&self) -> &Signal<String> {
        &self.clicked
    }
}

/// Creates [`MockView`]s sharing one bind counter.
pub struct MockFactory {
    pub item_height: f32,
    pub binds: Arc<AtomicUsize>,
}

impl MockFactory {
    pub fn new(item_height: f32) -> Self {
        Self {
            item_height,
            binds: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Total `set_model` calls across every view created so far.
    pub fn bind_count(&self) -> usize {
        self.binds.load(Ordering::SeqCst)
    }
}

impl ViewFactory<MockView> for MockFactory {
    fn create(&self, parent: Container) -> MockView {
        MockView {
            model: None,
            active: true,
            parent,
            clicked: Signal::new(),
            binds: Arc::clone(&self.binds),
        }
    }

    fn item_height(&self) -> f32 {
        self.item_height
    }
}

/// A scroll host with its viewport at the origin.
///
/// The scroll offset is clamped to the scrollable range, like a real scroll
/// area without elastic overscroll.
#[derive(Debug)]
pub struct MockHost {
    pub viewport: Rect,
    pub content_height: f32,
    pub offset: f32,
    pub spacer: LeadingSpacer,
    pub spacer_updates: usize,
}

impl MockHost {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport: Rect::new(0.0, 0.0, 320.0, viewport_height),
            content_height: 0.0,
            offset: 0.0,
            spacer: LeadingSpacer::NONE,
            spacer_updates: 0,
        }
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport.height()).max(0.0)
    }

    /// Scrolls as a user drag would, without notifying the list.
    pub fn scroll_to(&mut self, offset: f32) {
        self.set_scroll_offset(offset);
    }
}

impl ScrollHost for MockHost {
    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn content_rect(&self) -> Rect {
        self.viewport
            .offset_y(-self.offset)
            .with_height(self.content_height)
    }

    fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn update_leading_spacer(&mut self, spacer: LeadingSpacer) {
        self.spacer = spacer;
        self.spacer_updates += 1;
    }
}

/// Builds a list over a [`MockFactory`], returning the factory for bind counts.
pub fn build_list(config: ListConfig, viewport_height: f32) -> (TestList, Arc<MockFactory>) {
    init_tracing();
    let factory = Arc::new(MockFactory::new(ITEM_HEIGHT));
    let views: Arc<dyn ViewFactory<MockView>> = factory.clone();
    let list = PooledList::new(
        config.with_spacing(SPACING),
        views,
        MockHost::new(viewport_height),
    )
    .expect("valid list config");
    (list, factory)
}

/// `count` models named `item-0`, `item-1`, ...
pub fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item-{i}")).collect()
}

/// Models bound to the active views, in layout order.
pub fn bound_models(list: &TestList) -> Vec<String> {
    list.active_views()
        .filter_map(|view| view.model.clone())
        .collect()
}
