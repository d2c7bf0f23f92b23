use crate::quote::quote::Quote;
use crate::repository::fx_error::FxError;
use crate::repository::fx_triangulation::FxTriangulation;
use crate::repository::shared_fx_triangulation::SharedFxTriangulation;
use crate::test::helper_functions::{assert_close, make_quote};
use ntest::timeout;
use std::thread;

#[test]
fn test_clones_share_repository() {
    let repository = SharedFxTriangulation::new();
    let clone = repository.clone();

    let (_, handle) = make_quote(1.2);
    repository.add_quote("EURUSD", handle).unwrap();

    assert_close(clone.get_quote("USDEUR").unwrap().value(), 1.0 / 1.2);
    assert!(repository.contains("USDEUR"));
    assert_eq!(repository.len(), 2);
    assert!(!repository.is_empty());
}

#[test]
fn test_from_repository() {
    let mut repository = FxTriangulation::new();
    let (_, handle) = make_quote(110.0);
    repository.add_quote("USDJPY", handle).unwrap();

    let shared = SharedFxTriangulation::from(repository);

    assert_eq!(shared.get_quote("USDJPY").unwrap().value(), 110.0);
    assert_eq!(
        shared.get_quote("GBPCHF").err(),
        Some(FxError::NotFound("GBPCHF".to_string()))
    );
    assert_eq!(shared.len(), 1);
}

#[test]
#[timeout(10000)]
fn test_concurrent_lookups() {
    let repository = SharedFxTriangulation::new();
    let (eur_usd, handle) = make_quote(1.2);
    repository.add_quote("EURUSD", handle).unwrap();
    let (_, handle) = make_quote(130.0);
    repository.add_quote("EURJPY", handle).unwrap();

    let threads: Vec<_> = (0..8)
        .map(|i| {
            let repository = repository.clone();

            thread::spawn(move || {
                for _ in 0..100 {
                    let usd_jpy = repository.get_quote("USDJPY").unwrap().value();
                    assert_close(usd_jpy, 130.0 / 1.2);
                    assert_close(
                        repository.get_quote("JPYUSD").unwrap().value(),
                        1.2 / 130.0,
                    );
                }

                let (_, handle) = make_quote(1.0 + i as f64);
                repository
                    .add_quote(&format!("X{:02}USD", i), handle)
                    .unwrap();
            })
        })
        .collect();

    for thread in threads {
        thread.join().unwrap();
    }

    // EURUSD, EURJPY, USDJPY, JPYUSD and one quote per thread
    assert_eq!(repository.len(), 4 + 8);
    eur_usd.set_value(1.3);
    assert_close(repository.get_quote("USDJPY").unwrap().value(), 130.0 / 1.3);
}
