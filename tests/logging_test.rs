use lightning_geohash::logging::{init_from_config, init_logging};
use lightning_geohash::{neighbors, Error, GeohashConfig};
use tracing::Level;

// Only one global subscriber can exist per process, so both calls live in
// a single test.
#[test]
fn test_logging_initializes_once() {
    let config = GeohashConfig::default();
    assert!(init_from_config(&config).is_ok());

    // Emit events through the installed subscriber.
    assert!(neighbors("ezs42").is_ok());
    assert!(neighbors("ezs4!").is_err());

    assert!(matches!(
        init_logging(Level::DEBUG, true),
        Err(Error::Config(_))
    ));
}
