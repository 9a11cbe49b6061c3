//! Logging and profiling facilities for pooled lists.
//!
//! # Tracing Integration
//!
//! Pooled lists use the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("pooled_list=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pooled_list_core::signal";
    /// View pool target.
    pub const POOL: &str = "pooled_list::pool";
    /// Virtualization engine target (window computation and binding).
    pub const ENGINE: &str = "pooled_list::engine";
    /// Paging controller target.
    pub const PAGING: &str = "pooled_list::paging";
    /// Item click router target.
    pub const ROUTER: &str = "pooled_list::router";
    /// Performance spans target.
    pub const PERF: &str = "pooled_list::perf";
}

/// Performance tracing span guard.
///
/// Creates a tracing span that is active until the guard is dropped.
/// Useful for measuring the duration of operations with a timing-aware
/// subscriber.
///
/// ```
/// use pooled_list_core::PerfSpan;
///
/// fn update() {
///     let _span = PerfSpan::new("update_content");
///     // ... work ...
/// } // Span ends here
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
