//! Geohash encoding, decoding and neighbor lookup.
//!
//! A geohash is a base-32 string naming a rectangular cell of the lat/lng
//! plane. Longer strings name smaller cells, and every cell's hash starts
//! with its parent's hash, which makes geohashes a sortable,
//! prefix-groupable spatial key.
//!
//! ```
//! use lightning_geohash::{decode, encode, neighbors};
//!
//! let hash = encode(42.6, -5.6, 5);
//! assert_eq!(hash, "ezs42");
//!
//! let bbox = decode(&hash).unwrap();
//! assert!(bbox.min.lat <= 42.6 && 42.6 <= bbox.max.lat);
//!
//! assert_eq!(neighbors(&hash).unwrap().right, "ezs43");
//! ```

pub mod config;
pub mod error;
pub mod geohash;
pub mod logging;

pub use config::{ConfigBuilder, ConfigPreset, FanOutMode, GeohashConfig, LogLevel};
pub use error::{Error, Result};
pub use geohash::{
    cell_size, decode, decode_bounds, encode, neighbor, neighbors, neighbors_with,
    precision_for_error, BoundingBox, CellSize, Compass, Direction, GeoHash, LatLng,
    NeighborSet, Parity, BASE32, MAX_PRECISION,
};

use tracing::{debug, trace};

/// Geohash operations bound to a [`GeohashConfig`].
#[derive(Debug, Clone, Default)]
pub struct Geohasher {
    config: GeohashConfig,
}

impl Geohasher {
    pub fn new(config: GeohashConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            precision = config.default_precision,
            fan_out = ?config.fan_out,
            "geohasher configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeohashConfig {
        &self.config
    }

    /// Encode at the configured default precision.
    pub fn encode(&self, lat: f64, lng: f64) -> String {
        self.encode_with_precision(lat, lng, self.config.default_precision)
    }

    pub fn encode_with_precision(&self, lat: f64, lng: f64, precision: usize) -> String {
        let hash = encode(lat, lng, precision);
        trace!(lat, lng, precision, %hash, "encoded");
        hash
    }

    pub fn decode(&self, hash: &str) -> Result<BoundingBox> {
        decode(hash)
    }

    pub fn decode_bounds(&self, hash: &str) -> Result<(LatLng, LatLng)> {
        decode_bounds(hash)
    }

    pub fn neighbor(&self, hash: &str, direction: Direction) -> Result<String> {
        neighbor(hash, direction)
    }

    pub fn neighbors(&self, hash: &str) -> Result<NeighborSet> {
        neighbors_with(hash, self.config.fan_out)
    }
}
