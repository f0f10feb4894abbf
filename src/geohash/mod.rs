pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod neighbors;
pub mod precision;

pub use alphabet::{Direction, Parity, BASE32};
pub use decoder::{decode, decode_bounds, BoundingBox, LatLng};
pub use encoder::encode;
pub use neighbors::{neighbor, neighbors, neighbors_with, Compass, NeighborSet};
pub use precision::{cell_size, precision_for_error, CellSize, MAX_PRECISION};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An owned geohash that only ever holds alphabet characters.
///
/// Ordering is plain string ordering, so sorted geohashes keep nearby cells
/// together and every cell sorts directly after its parent prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash {
    hash: String,
}

impl GeoHash {
    pub fn new(lat: f64, lng: f64, precision: usize) -> Self {
        Self {
            hash: encode(lat, lng, precision),
        }
    }

    pub fn parse(hash: &str) -> Result<Self> {
        alphabet::values(hash)?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn precision(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    pub fn bounds(&self) -> BoundingBox {
        // Contents are validated on construction, so decoding cannot fail.
        decode(&self.hash).unwrap_or_else(|_| {
            BoundingBox::from_bounds(LatLng::new(-90.0, -180.0), LatLng::new(90.0, 180.0))
        })
    }

    pub fn center(&self) -> LatLng {
        self.bounds().mid
    }

    pub fn neighbor(&self, direction: Direction) -> Result<GeoHash> {
        neighbor(&self.hash, direction).map(|hash| GeoHash { hash })
    }

    pub fn neighbors(&self) -> Result<NeighborSet> {
        neighbors(&self.hash)
    }

    /// The enclosing cell one character up, `None` for the empty hash.
    pub fn parent(&self) -> Option<GeoHash> {
        let mut hash = self.hash.clone();
        hash.pop()?;
        Some(GeoHash { hash })
    }

    /// Whether `other` lies inside this cell (this hash is a prefix of it).
    pub fn contains(&self, other: &GeoHash) -> bool {
        other.hash.starts_with(&self.hash)
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

impl FromStr for GeoHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GeoHash::parse(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = Error;

    fn try_from(hash: String) -> Result<Self> {
        alphabet::values(&hash)?;
        Ok(Self { hash })
    }
}

impl From<GeoHash> for String {
    fn from(geohash: GeoHash) -> Self {
        geohash.hash
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}
