use fx_triangulation::config_scheme::config_scheme::ConfigScheme;
use fx_triangulation::config_scheme::helper_functions::set_log_level;
use fx_triangulation::config_scheme::market_config::make_fx_triangulation;
use fx_triangulation::Quote;
use std::process;

#[macro_use]
extern crate log;

fn main() {
    let config = match ConfigScheme::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            process::exit(2);
        }
    };

    set_log_level(&config.service);

    let mut repository = match make_fx_triangulation(&config.market) {
        Ok(repository) => repository,
        Err(e) => {
            error!("Market config error: {}", e);
            process::exit(2);
        }
    };
    info!("Loaded {} quotes.", repository.len());

    let mut failed = 0;
    for pair in &config.market.pairs {
        match repository.get_quote(pair) {
            Ok(quote) => println!("{} {}", pair, quote.value()),
            Err(e) => {
                error!("{}", e);
                failed += 1;
            }
        }
    }
    info!(
        "Resolved {} of {} pairs.",
        config.market.pairs.len() - failed,
        config.market.pairs.len()
    );

    if failed > 0 {
        process::exit(1);
    }
}
