//! Reactive properties with change detection.
//!
//! A [`Property`] wraps a value and reports whether a `set` actually changed
//! it, so the owner can emit its notification signal only on real changes.
//!
//! # Example
//!
//! ```
//! use pooled_list_core::{Property, Signal};
//!
//! struct Pager {
//!     page: Property<usize>,
//!     page_changed: Signal<usize>,
//! }
//!
//! impl Pager {
//!     fn set_page(&self, page: usize) {
//!         if self.page.set(page) {
//!             self.page_changed.emit(page);
//!         }
//!     }
//! }
//!
//! let pager = Pager { page: Property::new(1), page_changed: Signal::new() };
//! pager.set_page(1); // no change, no emission
//! pager.set_page(2);
//! assert_eq!(pager.page.get(), 2);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Set the value without change detection.
    ///
    /// Used when a value is reset and the caller emits its own notification.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<usize>: Send, Sync);
