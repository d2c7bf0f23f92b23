use crate::quote::quote::Quote;
use std::sync::{PoisonError, RwLock};

/// Externally owned quote whose value is set by the market-data feed.
#[derive(Debug)]
pub struct SimpleQuote(RwLock<f64>);

impl SimpleQuote {
    pub fn new(value: f64) -> Self {
        Self(RwLock::new(value))
    }

    /// Returns the previous value.
    pub fn set_value(&self, value: f64) -> f64 {
        let mut current = self.0.write().unwrap_or_else(PoisonError::into_inner);

        std::mem::replace(&mut *current, value)
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> f64 {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}
