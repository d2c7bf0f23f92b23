use std::sync::Arc;

/// Live numeric source: current value of 1 unit of base currency in quote currency terms.
pub trait Quote: Send + Sync {
    fn value(&self) -> f64;
}

/// Shared handle to a quote. Whoever holds one sees every later change of the source.
pub type QuoteHandle = Arc<dyn Quote>;
