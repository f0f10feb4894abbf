use super::alphabet;
use super::encoder::{LAT_RANGE, LNG_RANGE};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The rectangle a geohash denotes, with its midpoint as the decoded estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LatLng,
    pub mid: LatLng,
    pub max: LatLng,
}

impl BoundingBox {
    pub fn from_bounds(min: LatLng, max: LatLng) -> Self {
        Self {
            min,
            mid: LatLng {
                lat: (min.lat + max.lat) / 2.0,
                lng: (min.lng + max.lng) / 2.0,
            },
            max,
        }
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.min.lat
            && point.lat <= self.max.lat
            && point.lng >= self.min.lng
            && point.lng <= self.max.lng
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    pub fn width(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    /// Half the height: how far the midpoint can be from the true latitude.
    pub fn lat_error(&self) -> f64 {
        self.height() / 2.0
    }

    pub fn lng_error(&self) -> f64 {
        self.width() / 2.0
    }
}

/// Decode a geohash into its south-west and north-east corners.
///
/// An empty hash decodes to the whole world.
pub fn decode_bounds(hash: &str) -> Result<(LatLng, LatLng)> {
    let mut lat_range = LAT_RANGE;
    let mut lng_range = LNG_RANGE;
    let mut is_lng = true;

    for value in alphabet::values(hash)? {
        for bit in (0..5).rev() {
            let range = if is_lng {
                &mut lng_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if (value >> bit) & 1 == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            is_lng = !is_lng;
        }
    }

    Ok((
        LatLng::new(lat_range.0, lng_range.0),
        LatLng::new(lat_range.1, lng_range.1),
    ))
}

pub fn decode(hash: &str) -> Result<BoundingBox> {
    let (min, max) = decode_bounds(hash)?;
    Ok(BoundingBox::from_bounds(min, max))
}
