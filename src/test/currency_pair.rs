use crate::repository::currency_pair::CurrencyPair;
use crate::repository::fx_error::FxError;

#[test]
fn test_parse_and_display() {
    let pair: CurrencyPair = "EURUSD".parse().unwrap();

    assert_eq!(pair.base(), "EUR");
    assert_eq!(pair.quote(), "USD");
    assert_eq!(pair.to_string(), "EURUSD");
    assert_eq!(pair.inverse().to_string(), "USDEUR");
    assert!(!pair.is_identity());
    assert!("XAUXAU".parse::<CurrencyPair>().unwrap().is_identity());
}

#[test]
fn test_other_and_contains() {
    let pair: CurrencyPair = "EURJPY".parse().unwrap();

    assert_eq!(pair.other("EUR"), Some("JPY"));
    assert_eq!(pair.other("JPY"), Some("EUR"));
    assert_eq!(pair.other("USD"), None);
    assert!(pair.contains("JPY"));
    assert!(!pair.contains("USD"));
}

#[test]
fn test_ordering_follows_key_string() {
    let keys = ["USDJPY", "AUDUSD", "EURUSD", "EURJPY", "GBPCHF"];

    let mut pairs: Vec<CurrencyPair> = keys.iter().map(|v| v.parse().unwrap()).collect();
    pairs.sort();
    let mut strings: Vec<&str> = keys.to_vec();
    strings.sort_unstable();

    let pairs: Vec<String> = pairs.iter().map(|v| v.to_string()).collect();
    assert_eq!(pairs, strings);
}

#[test]
fn test_invalid_keys() {
    for key in ["", "EUR", "EURUS", "EURUSDX", "EUR/USD", "EUR-US", "EURUS ", "ЕURUSD"] {
        assert_eq!(
            key.parse::<CurrencyPair>(),
            Err(FxError::InvalidKey(key.to_string())),
            "key: {:?}",
            key
        );
    }
}
