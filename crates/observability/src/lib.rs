//! Tracing/logging setup shared by processes that embed the catalog domain.
//!
//! The domain crates only emit `tracing` events; installing a subscriber is
//! left to the host process through this crate.

/// Initialize process-wide tracing with the filter from `RUST_LOG`
/// (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing with explicit filter directives
/// (e.g. `"catalog_products=debug"`).
pub fn init_with_filter(directives: &str) {
    tracing::init_with_filter(directives);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
