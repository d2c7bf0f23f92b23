use crate::repository::fx_error::FxError;
use std::fmt;
use std::str::FromStr;

pub const CURRENCY_CODE_LEN: usize = 3;
pub const PAIR_KEY_LEN: usize = CURRENCY_CODE_LEN * 2;

/// Parsed pair key. "EURUSD" means units of USD per 1 EUR.
///
/// Ordering is by `(base, quote)`, which is the lexicographic order of the key string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Both codes must already be valid.
    pub(crate) fn from_codes(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn inverse(&self) -> Self {
        Self::from_codes(&self.quote, &self.base)
    }

    pub fn is_identity(&self) -> bool {
        self.base == self.quote
    }

    pub fn contains(&self, code: &str) -> bool {
        self.base == code || self.quote == code
    }

    /// The counterpart of `code` within this pair.
    pub fn other(&self, code: &str) -> Option<&str> {
        if self.base == code {
            Some(self.quote.as_str())
        } else if self.quote == code {
            Some(self.base.as_str())
        } else {
            None
        }
    }
}

impl FromStr for CurrencyPair {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PAIR_KEY_LEN || !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(FxError::InvalidKey(s.to_string()));
        }

        let (base, quote) = s.split_at(CURRENCY_CODE_LEN);

        Ok(Self::from_codes(base, quote))
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}
