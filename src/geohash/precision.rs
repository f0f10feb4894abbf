//! Cell dimensions per geohash precision.
//!
//! | precision | lat bits | lng bits | lat error  | lng error  |
//! |-----------|----------|----------|------------|------------|
//! | 1         | 2        | 3        | ±23        | ±23        |
//! | 2         | 5        | 5        | ±2.8       | ±5.6       |
//! | 3         | 7        | 8        | ±0.70      | ±0.70      |
//! | 4         | 10       | 10       | ±0.087     | ±0.18      |
//! | 5         | 12       | 13       | ±0.022     | ±0.022     |
//! | 6         | 15       | 15       | ±0.0027    | ±0.0055    |
//! | 7         | 17       | 18       | ±0.00068   | ±0.00068   |
//! | 8         | 20       | 20       | ±0.000085  | ±0.00017   |

use serde::{Deserialize, Serialize};

/// Highest precision accepted by configuration. At 20 characters each axis
/// gets 50 bits, which still fits the f64 mantissa.
pub const MAX_PRECISION: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub precision: usize,
    pub lat_bits: u32,
    pub lng_bits: u32,
    /// Half the cell height in degrees.
    pub lat_error: f64,
    /// Half the cell width in degrees.
    pub lng_error: f64,
}

pub fn lat_bits(precision: usize) -> u32 {
    (precision * 5 / 2) as u32
}

pub fn lng_bits(precision: usize) -> u32 {
    ((precision * 5 + 1) / 2) as u32
}

pub fn cell_size(precision: usize) -> CellSize {
    let lat_bits = lat_bits(precision);
    let lng_bits = lng_bits(precision);
    CellSize {
        precision,
        lat_bits,
        lng_bits,
        lat_error: 90.0 / 2f64.powi(lat_bits as i32),
        lng_error: 180.0 / 2f64.powi(lng_bits as i32),
    }
}

/// Smallest precision whose cells are within both error limits.
pub fn precision_for_error(max_lat_error: f64, max_lng_error: f64) -> usize {
    (1..=MAX_PRECISION)
        .find(|&p| {
            let size = cell_size(p);
            size.lat_error <= max_lat_error && size.lng_error <= max_lng_error
        })
        .unwrap_or(MAX_PRECISION)
}
