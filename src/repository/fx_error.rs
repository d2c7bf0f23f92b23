use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// Key is not two 3-character currency codes
    #[error("invalid currency pair key: {0:?}")]
    InvalidKey(String),

    /// No direct, inverse or bridged quote is available
    #[error("no quote found for currency pair {0}")]
    NotFound(String),
}
