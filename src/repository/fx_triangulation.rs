use crate::quote::derived_quote::DerivedQuote;
use crate::quote::quote::QuoteHandle;
use crate::quote::unit_quote::UnitQuote;
use crate::repository::currency_pair::CurrencyPair;
use crate::repository::fx_error::FxError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// FX spot repository that answers pairs it was never given directly.
///
/// `get_quote` tries, in order:
/// 1. the stored entry for the pair;
/// 2. a unit quote when both currencies are the same;
/// 3. the inverse of the stored reversed pair (USDEUR from EURUSD);
/// 4. a bridge through a third currency (USDJPY from EURUSD and EURJPY).
///
/// Whatever 2-4 build is stored under the requested key, so the next lookup is a direct hit.
/// Built quotes hold handles to the stored ones and recompute on every read.
///
/// Lookups grow the map, hence `&mut self`. Use
/// [`SharedFxTriangulation`](crate::repository::shared_fx_triangulation::SharedFxTriangulation)
/// to share one repository between threads.
#[derive(Default)]
pub struct FxTriangulation {
    map: BTreeMap<CurrencyPair, QuoteHandle>,
}

impl FxTriangulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `pair`, built or not.
    pub fn add_quote(&mut self, pair: &str, quote: QuoteHandle) -> Result<(), FxError> {
        let pair: CurrencyPair = pair.parse()?;

        if self.map.insert(pair.clone(), quote).is_some() {
            trace!("replaced quote for {}", pair);
        } else {
            trace!("added quote for {}", pair);
        }

        Ok(())
    }

    pub fn get_quote(&mut self, pair: &str) -> Result<QuoteHandle, FxError> {
        let pair: CurrencyPair = pair.parse()?;

        if let Some(quote) = self.map.get(&pair) {
            trace!("direct hit for {}", pair);

            return Ok(Arc::clone(quote));
        }

        match self.resolve(&pair) {
            Some(quote) => {
                self.map.insert(pair, Arc::clone(&quote));

                Ok(quote)
            }
            None => {
                debug!("no quote for {} among {} entries", pair, self.map.len());

                Err(FxError::NotFound(pair.to_string()))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `pair` is stored, directly or as a previously built quote.
    pub fn contains(&self, pair: &str) -> bool {
        pair.parse::<CurrencyPair>()
            .map(|pair| self.map.contains_key(&pair))
            .unwrap_or(false)
    }

    /// Stored keys in ascending order.
    pub fn pairs(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.map.keys()
    }

    fn resolve(&self, pair: &CurrencyPair) -> Option<QuoteHandle> {
        if pair.is_identity() {
            debug!("{} resolved as unit quote", pair);

            return Some(Arc::new(UnitQuote));
        }

        let reversed = pair.inverse();
        if let Some(quote) = self.map.get(&reversed) {
            debug!("{} resolved as inverse of {}", pair, reversed);

            return Some(Arc::new(DerivedQuote::inverse(Arc::clone(quote))));
        }

        self.bridge(pair)
    }

    /// Scans stored keys in ascending order; the first key linking the base currency to a
    /// third currency that is also linked to the quote currency wins.
    fn bridge(&self, pair: &CurrencyPair) -> Option<QuoteHandle> {
        let (base, quote) = (pair.base(), pair.quote());

        for (key, stored) in &self.map {
            let bridge = match key.other(base) {
                Some(code) if code != base && code != quote => code,
                _ => continue,
            };

            let quote_leg = match self.leg(quote, bridge) {
                Some(leg) => leg,
                None => continue,
            };
            let base_leg = if key.base() == base {
                Arc::clone(stored)
            } else {
                Arc::new(DerivedQuote::inverse(Arc::clone(stored))) as QuoteHandle
            };

            debug!("{} resolved via {} using {}", pair, bridge, key);

            return Some(Arc::new(DerivedQuote::bridge(base_leg, quote_leg)));
        }

        None
    }

    /// CODE/BRIDGE, inverting a stored BRIDGE/CODE if that is all there is.
    fn leg(&self, code: &str, bridge: &str) -> Option<QuoteHandle> {
        let direct = CurrencyPair::from_codes(code, bridge);

        if let Some(quote) = self.map.get(&direct) {
            return Some(Arc::clone(quote));
        }

        self.map
            .get(&direct.inverse())
            .map(|quote| Arc::new(DerivedQuote::inverse(Arc::clone(quote))) as QuoteHandle)
    }
}
