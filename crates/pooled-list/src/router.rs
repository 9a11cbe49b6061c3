//! Routes row clicks to the list owner.
//!
//! Every active view gets exactly one router connection on its `clicked`
//! signal. The connection re-emits the clicked model on the list's
//! `item_clicked` signal. Attaching is idempotent: any previous connection is
//! removed before a new one is made. Views parked back in the pool are
//! detached, so idle views never reach the owner.

use std::sync::Arc;

use pooled_list_core::logging::targets;
use pooled_list_core::Signal;

use crate::view::{ItemView, RecycledView};

/// Republishes view clicks on a single owner-facing signal.
pub struct ClickRouter<M> {
    item_clicked: Arc<Signal<M>>,
}

impl<M: Clone + Send + 'static> ClickRouter<M> {
    /// Creates a router emitting on `item_clicked`.
    pub fn new(item_clicked: Arc<Signal<M>>) -> Self {
        Self { item_clicked }
    }

    /// The signal clicks are republished on.
    pub fn item_clicked(&self) -> &Arc<Signal<M>> {
        &self.item_clicked
    }

    /// Subscribes to the view's click signal, replacing any earlier subscription.
    pub fn attach<V: ItemView<M>>(&self, slot: &mut RecycledView<V>) {
        self.detach(slot);

        let target = Arc::clone(&self.item_clicked);
        let id = slot.view().clicked().connect(move |model: &M| {
            tracing::trace!(target: targets::ROUTER, "item clicked");
            target.emit(model.clone());
        });
        slot.click_connection = Some(id);
    }

    /// Removes the router's subscription from the view, if any.
    pub fn detach<V: ItemView<M>>(&self, slot: &mut RecycledView<V>) {
        if let Some(id) = slot.click_connection.take() {
            slot.view().clicked().disconnect(id);
        }
    }
}

impl<M> std::fmt::Debug for ClickRouter<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickRouter")
            .field("item_clicked", &self.item_clicked)
            .finish()
    }
}

static_assertions::assert_impl_all!(ClickRouter<String>: Send, Sync);
