use crate::quote::quote::Quote;

/// Rate of a currency against itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitQuote;

impl Quote for UnitQuote {
    fn value(&self) -> f64 {
        1.0
    }
}
