use super::alphabet::BASE32;

pub(crate) const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub(crate) const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// Encode a coordinate into a geohash of `precision` characters.
///
/// Coordinates are not range checked: values outside the world box still
/// produce a hash, pinned to the nearest edge cell. A precision of zero gives
/// an empty string.
pub fn encode(lat: f64, lng: f64, precision: usize) -> String {
    let mut hash = String::with_capacity(precision);
    let mut lat_range = LAT_RANGE;
    let mut lng_range = LNG_RANGE;
    let mut is_lng = true;

    while hash.len() < precision {
        let mut value = 0usize;
        for bit in (0..5).rev() {
            let (range, target) = if is_lng {
                (&mut lng_range, lng)
            } else {
                (&mut lat_range, lat)
            };
            let mid = (range.0 + range.1) / 2.0;
            if target > mid {
                value |= 1 << bit;
                range.0 = mid;
            } else {
                range.1 = mid;
            }
            is_lng = !is_lng;
        }
        hash.push(BASE32[value] as char);
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_points() {
        assert_eq!(encode(42.6, -5.6, 5), "ezs42");
        assert_eq!(encode(57.64911, 10.40744, 11), "u4pruydqqvj");
        assert_eq!(encode(37.7749, -122.4194, 9), "9q8yyk8yt");
    }

    #[test]
    fn test_encode_zero_precision() {
        assert_eq!(encode(10.0, 10.0, 0), "");
    }

    #[test]
    fn test_encode_midpoint_goes_low() {
        // Ties fall into the lower half on both axes.
        assert_eq!(encode(0.0, 0.0, 1), "7");
        assert_eq!(encode(0.0, 0.0, 3), "7zz");
    }

    #[test]
    fn test_encode_world_corners() {
        assert_eq!(encode(-90.0, -180.0, 4), "0000");
        assert_eq!(encode(90.0, 180.0, 4), "zzzz");
    }

    #[test]
    fn test_encode_prefix_stable() {
        let long = encode(-33.8688, 151.2093, 12);
        for p in 1..12 {
            assert_eq!(encode(-33.8688, 151.2093, p), long[..p]);
        }
    }
}
