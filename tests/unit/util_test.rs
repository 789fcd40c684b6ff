//! Tests for utility functions

use parking_grid::util::{init_tracing, DEFAULT_FILTER};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
    assert!(DEFAULT_FILTER.starts_with("parking_grid"));
}
