//! Pooled List - a virtualized list view engine.
//!
//! A [`PooledList`] displays a long collection through a small set of
//! recycled row views. Rows scrolled above the viewport are replaced by a
//! single leading spacer, so the number of live views depends on the
//! viewport height only, never on the collection length.
//!
//! # Modules
//!
//! - [`view`]: The view capabilities the engine needs ([`ItemView`], [`ViewFactory`])
//! - [`pool`]: The idle view pool
//! - [`window`]: Pure visible-window arithmetic
//! - [`host`]: The scroll/layout host abstraction
//! - [`paging`]: Discrete page navigation
//! - [`router`]: Click routing from views to the list owner
//! - [`list`]: The list widget tying it all together
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pooled_list::{ListConfig, PooledList};
//!
//! let mut list = PooledList::new(ListConfig::new().with_spacing(10.0), Arc::new(RowFactory), host)?;
//! list.item_clicked.connect(|name: &String| println!("Clicked {name}"));
//! list.set_items(vec!["Apple".to_string(), "Banana".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod list;
pub mod paging;
pub mod pool;
pub mod router;
pub mod view;
pub mod window;

pub use config::{DEFAULT_POOL_CAPACITY, LayoutMetrics, ListConfig, ListMode, Padding};
pub use error::{ListError, Result};
pub use host::{LeadingSpacer, ScrollHost, culled_extent};
pub use list::PooledList;
pub use paging::{PageLayout, PagingController};
pub use pool::ViewPool;
pub use router::ClickRouter;
pub use view::{Container, ItemView, PooledView, RecycledView, ViewFactory};
pub use window::WindowPlan;

pub use pooled_list_core::{ConnectionId, Property, Rect, Signal};
