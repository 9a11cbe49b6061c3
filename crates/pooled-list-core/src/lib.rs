//! Core systems for pooled lists.
//!
//! This crate provides the foundation the list engine is built on:
//!
//! - **Signal/Slot System**: Type-safe notification from views and widgets
//! - **Property System**: Values with change detection
//! - **Geometry**: Points, sizes and rectangles in a y-down coordinate space
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use pooled_list_core::Signal;
//!
//! // Create a signal that notifies when a row is clicked
//! let clicked = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = clicked.connect(|row| {
//!     println!("Row {} clicked", row);
//! });
//!
//! // Emit the signal
//! clicked.emit(3);
//!
//! // Disconnect when done
//! clicked.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod property;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
