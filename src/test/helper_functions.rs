use crate::quote::quote::QuoteHandle;
use crate::quote::simple_quote::SimpleQuote;
use std::sync::Arc;

pub const EPS: f64 = 1e-12;

/// Source the test keeps for updates, and the handle handed to the repository.
pub fn make_quote(value: f64) -> (Arc<SimpleQuote>, QuoteHandle) {
    let source = Arc::new(SimpleQuote::new(value));
    let handle: QuoteHandle = Arc::clone(&source) as QuoteHandle;

    (source, handle)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}
