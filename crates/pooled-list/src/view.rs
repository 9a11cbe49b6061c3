//! View capabilities the list engine depends on.
//!
//! A row view is any value implementing [`ItemView<M>`]. The engine never
//! renders anything itself: it moves views between the idle pool and the
//! content container, switches them on and off, and hands them models.
//!
//! # Example
//!
//! ```
//! use pooled_list::{Container, ItemView, PooledView, ViewFactory};
//! use pooled_list_core::Signal;
//!
//! struct Row {
//!     model: Option<String>,
//!     active: bool,
//!     parent: Container,
//!     clicked: Signal<String>,
//! }
//!
//! impl PooledView for Row {
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//!     fn is_active(&self) -> bool { self.active }
//!     fn set_parent(&mut self, parent: Container) { self.parent = parent; }
//!     fn parent(&self) -> Container { self.parent }
//! }
//!
//! impl ItemView<String> for Row {
//!     fn set_model(&mut self, model: String) { self.model = Some(model); }
//!     fn model(&self) -> Option<&String> { self.model.as_ref() }
//!     fn clicked(&self) -> &Signal<String> { &self.clicked }
//! }
//!
//! struct RowFactory;
//!
//! impl ViewFactory<Row> for RowFactory {
//!     fn create(&self, parent: Container) -> Row {
//!         Row { model: None, active: true, parent, clicked: Signal::new() }
//!     }
//!     fn item_height(&self) -> f32 { 32.0 }
//! }
//! ```

use pooled_list_core::{ConnectionId, Signal};

/// The container a view is currently parented to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The neutral container holding idle pooled views.
    Pool,
    /// The list's content container, laid out below the leading spacer.
    Content,
}

/// Lifecycle capabilities needed to pool a view.
pub trait PooledView {
    /// Activates or deactivates the view.
    ///
    /// Inactive views are neither rendered nor hit-tested.
    fn set_active(&mut self, active: bool);

    /// Whether the view is currently active.
    fn is_active(&self) -> bool;

    /// Moves the view under another container.
    fn set_parent(&mut self, parent: Container);

    /// The container the view is parented to.
    fn parent(&self) -> Container;

    /// Resets position and rotation to a neutral state.
    ///
    /// Called when the view is parked in the pool.
    fn reset_transform(&mut self) {}
}

/// A row view able to display a model of type `M`.
pub trait ItemView<M>: PooledView {
    /// Binds a model to the view; the view refreshes itself.
    fn set_model(&mut self, model: M);

    /// The currently bound model, if any.
    fn model(&self) -> Option<&M>;

    /// Emitted by the view with its bound model when it is clicked.
    fn clicked(&self) -> &Signal<M>;
}

/// Creates views and describes their fixed layout.
pub trait ViewFactory<V>: Send + Sync {
    /// Creates a new view parented to `parent`.
    ///
    /// Views created under [`Container::Pool`] are deactivated by the pool
    /// right after creation.
    fn create(&self, parent: Container) -> V;

    /// Fixed display height of every view this factory creates.
    fn item_height(&self) -> f32;
}

/// A view together with the list's bookkeeping for it.
///
/// The pool and the active set move `RecycledView`s around so the click
/// connection made for a view travels with it.
#[derive(Debug)]
pub struct RecycledView<V> {
    view: V,
    pub(crate) click_connection: Option<ConnectionId>,
}

impl<V> RecycledView<V> {
    pub(crate) fn new(view: V) -> Self {
        Self {
            view,
            click_connection: None,
        }
    }

    /// The wrapped view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The wrapped view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The connection the click router holds on this view, if any.
    pub fn click_connection(&self) -> Option<ConnectionId> {
        self.click_connection
    }
}
