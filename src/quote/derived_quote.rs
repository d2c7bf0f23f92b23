use crate::quote::quote::{Quote, QuoteHandle};

/// Quote computed on every read from other quotes.
///
/// Only handles are kept, never a number, so a change of any underlying
/// source is visible through every derived quote built on top of it.
#[derive(Clone)]
pub enum DerivedQuote {
    /// `1 / x`
    Inverse(QuoteHandle),

    /// `base_leg / quote_leg`, where both legs are quoted against the same bridge currency:
    /// `base_leg` is BASE/C and `quote_leg` is QUOTE/C.
    Bridge {
        base_leg: QuoteHandle,
        quote_leg: QuoteHandle,
    },
}

impl DerivedQuote {
    pub fn inverse(quote: QuoteHandle) -> Self {
        Self::Inverse(quote)
    }

    pub fn bridge(base_leg: QuoteHandle, quote_leg: QuoteHandle) -> Self {
        Self::Bridge {
            base_leg,
            quote_leg,
        }
    }
}

impl Quote for DerivedQuote {
    fn value(&self) -> f64 {
        match self {
            Self::Inverse(quote) => 1.0 / quote.value(),
            Self::Bridge {
                base_leg,
                quote_leg,
            } => base_leg.value() / quote_leg.value(),
        }
    }
}
