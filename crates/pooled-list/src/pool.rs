//! Pool of reusable, idle row views.
//!
//! The pool is prewarmed with `capacity` deactivated views. [`ViewPool::acquire`]
//! hands out an idle view if there is one and creates exactly one new view
//! otherwise; [`ViewPool::release`] parks exactly one view. Released views
//! always re-enter the idle queue, so after an overflow the queue may hold
//! more than `capacity` views.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use pooled_list_core::logging::targets;

use crate::view::{Container, PooledView, RecycledView, ViewFactory};

/// A FIFO pool of idle views.
pub struct ViewPool<V> {
    idle: VecDeque<RecycledView<V>>,
    factory: Arc<dyn ViewFactory<V>>,
    capacity: usize,
    created: usize,
}

impl<V: PooledView> ViewPool<V> {
    /// Creates a pool holding `capacity` idle views.
    pub fn new(factory: Arc<dyn ViewFactory<V>>, capacity: usize) -> Self {
        let mut pool = Self {
            idle: VecDeque::with_capacity(capacity),
            factory,
            capacity,
            created: 0,
        };

        for _ in 0..capacity {
            let mut view = pool.instantiate(Container::Pool);
            view.set_active(false);
            pool.idle.push_back(RecycledView::new(view));
        }

        tracing::debug!(target: targets::POOL, capacity, "view pool prewarmed");
        pool
    }

    /// Takes a view out of the pool, parented to `parent` and active.
    ///
    /// Callers must not assume the view keeps a previous model binding.
    pub fn acquire(&mut self, parent: Container) -> RecycledView<V> {
        match self.idle.pop_front() {
            Some(mut slot) => {
                let view = slot.view_mut();
                view.set_parent(parent);
                view.set_active(true);
                slot
            }
            None => {
                let view = self.instantiate(parent);
                tracing::debug!(
                    target: targets::POOL,
                    created = self.created,
                    capacity = self.capacity,
                    "pool empty, created overflow view"
                );
                RecycledView::new(view)
            }
        }
    }

    /// Deactivates a view and parks it in the idle queue.
    pub fn release(&mut self, mut slot: RecycledView<V>) {
        let view = slot.view_mut();
        view.set_active(false);
        view.reset_transform();
        view.set_parent(Container::Pool);
        self.idle.push_back(slot);
    }

    /// Number of idle views waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Number of views created up front.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of views this pool has ever created.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Iterates over the idle views.
    pub fn idle_views(&self) -> impl Iterator<Item = &RecycledView<V>> {
        self.idle.iter()
    }

    fn instantiate(&mut self, parent: Container) -> V {
        self.created += 1;
        self.factory.create(parent)
    }
}

impl<V> fmt::Debug for ViewPool<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewPool")
            .field("idle", &self.idle.len())
            .field("capacity", &self.capacity)
            .field("created", &self.created)
            .finish()
    }
}
