use crate::quote::quote::QuoteHandle;
use crate::repository::fx_error::FxError;
use crate::repository::fx_triangulation::FxTriangulation;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe handle to one [`FxTriangulation`]. Clones share the same repository.
///
/// The lock is held for the whole search-and-insert of a lookup.
#[derive(Clone, Default)]
pub struct SharedFxTriangulation(Arc<Mutex<FxTriangulation>>);

impl SharedFxTriangulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_quote(&self, pair: &str, quote: QuoteHandle) -> Result<(), FxError> {
        self.lock().add_quote(pair, quote)
    }

    pub fn get_quote(&self, pair: &str) -> Result<QuoteHandle, FxError> {
        self.lock().get_quote(pair)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, pair: &str) -> bool {
        self.lock().contains(pair)
    }

    // Every mutation leaves the map consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, FxTriangulation> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<FxTriangulation> for SharedFxTriangulation {
    fn from(repository: FxTriangulation) -> Self {
        Self(Arc::new(Mutex::new(repository)))
    }
}
