pub mod derived_quote;
pub mod quote;
pub mod simple_quote;
pub mod unit_quote;
