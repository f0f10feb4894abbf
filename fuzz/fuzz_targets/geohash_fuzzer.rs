#![no_main]
use libfuzzer_sys::fuzz_target;
use lightning_geohash::{decode, encode, neighbor, neighbors, Direction, GeoHash};

/// Fuzzing target for the geohash transforms
///
/// Arbitrary strings must decode or fail cleanly, and every hash that
/// parses must resolve all neighbors at its own precision.

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        fuzz_string_input(text);
    }

    if data.len() >= 17 {
        fuzz_coordinates(data);
    }
});

fn fuzz_string_input(text: &str) {
    let decoded = decode(text);
    let parsed = GeoHash::parse(text);
    assert_eq!(decoded.is_ok(), parsed.is_ok());

    if let Ok(hash) = parsed {
        if hash.is_empty() {
            assert!(neighbors(text).is_err());
            return;
        }
        let set = neighbors(text).expect("valid geohash must have neighbors");
        for (_, adjacent) in set.iter() {
            assert_eq!(adjacent.len(), text.len());
        }
        for direction in Direction::ALL {
            assert_eq!(neighbor(text, direction).unwrap().len(), text.len());
        }
    }
}

fn fuzz_coordinates(data: &[u8]) {
    let lat = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let lng = f64::from_le_bytes(data[8..16].try_into().unwrap());
    let precision = (data[16] % 24) as usize;

    let hash = encode(lat, lng, precision);
    assert_eq!(hash.len(), precision);
    assert!(decode(&hash).is_ok());
}
