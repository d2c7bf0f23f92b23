use crate::config_scheme::market_config::MarketConfig;
use crate::config_scheme::service_config::ServiceConfig;
use clap::{App, Arg, ArgMatches, ValueHint};

#[derive(Debug, Default, Clone)]
pub struct ConfigScheme {
    pub market: MarketConfig,
    pub service: ServiceConfig,
}

impl ConfigScheme {
    /// Call only once
    pub fn new() -> Result<Self, String> {
        Self::from_matches(&Self::make_app().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        Ok(Self {
            market: MarketConfig::new(matches)?,
            service: ServiceConfig::new(matches)?,
        })
    }

    pub fn make_app() -> App<'static> {
        App::new("fx-triangulation")
            .version("1.0")
            .arg(
                Arg::new("service_config")
                    .long("service_config")
                    .value_name("PATH")
                    .takes_value(true)
                    .help("Service config file path")
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                Arg::new("market_config")
                    .long("market_config")
                    .value_name("PATH")
                    .takes_value(true)
                    .help("Market config file path")
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                Arg::new("pairs")
                    .long("pairs")
                    .value_name("PAIRS")
                    .takes_value(true)
                    .help("Pairs to resolve (comma-separated, e.g. USDJPY,GBPCHF). Overrides \"pairs\" from market config."),
            )
    }
}
