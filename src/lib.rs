//! FX spot repository that composes quotes it was never given directly
//! by inverting stored pairs and triangulating through a shared currency.

#[macro_use]
extern crate log;

pub mod config_scheme;
pub mod quote;
pub mod repository;


pub use quote::derived_quote::DerivedQuote;
pub use quote::quote::{Quote, QuoteHandle};
pub use quote::simple_quote::SimpleQuote;
pub use quote::unit_quote::UnitQuote;
pub use repository::currency_pair::CurrencyPair;
pub use repository::fx_error::FxError;
pub use repository::fx_triangulation::FxTriangulation;
pub use repository::shared_fx_triangulation::SharedFxTriangulation;
