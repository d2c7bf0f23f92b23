use crate::config_scheme::helper_functions::{
    get_config_from_config_files, get_param_value_as_vec_of_string, split_list,
};
use crate::quote::simple_quote::SimpleQuote;
use crate::repository::fx_error::FxError;
use crate::repository::fx_triangulation::FxTriangulation;
use clap::ArgMatches;
use config::ConfigError;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MarketConfig {
    /// Directly supplied spot quotes, keyed by upper-cased pair
    pub quotes: BTreeMap<String, f64>,
    /// Pairs to resolve. Defaults to every key of `quotes`.
    pub pairs: Vec<String>,
}

impl MarketConfig {
    pub fn new(matches: &ArgMatches) -> Result<Self, String> {
        let market_config = get_config_from_config_files(matches, "market_config")?;
        let mut market = Self::from_config(&market_config)?;

        if let Some(pairs) = matches.value_of("pairs") {
            market.pairs = split_list(pairs)
                .into_iter()
                .map(|v| v.to_uppercase())
                .collect();
        }

        Ok(market)
    }

    pub fn from_config(market_config: &config::Config) -> Result<Self, String> {
        let quotes = match market_config.get_table("quotes") {
            Ok(table) => table
                .into_iter()
                .map(|(pair, value)| {
                    value
                        .into_float()
                        .map(|value| (pair.to_uppercase(), value))
                        .map_err(|e| format!("market_config: quotes.{}: {}", pair, e))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()?,
            Err(ConfigError::NotFound(_)) => BTreeMap::new(),
            Err(e) => return Err(format!("market_config: quotes: {}", e)),
        };

        let pairs = get_param_value_as_vec_of_string(market_config, "pairs")
            .map(|v| v.into_iter().map(|v| v.to_uppercase()).collect())
            .unwrap_or_else(|| quotes.keys().cloned().collect());

        Ok(Self { quotes, pairs })
    }
}

/// Repository seeded with one [`SimpleQuote`] per configured quote.
pub fn make_fx_triangulation(market_config: &MarketConfig) -> Result<FxTriangulation, FxError> {
    let mut repository = FxTriangulation::new();

    for (pair, &value) in &market_config.quotes {
        repository.add_quote(pair, Arc::new(SimpleQuote::new(value)))?;
    }

    Ok(repository)
}
