//! Base-32 alphabet and the direction/parity lookup tables.
//!
//! The neighbor and border tables are written out as the classic permutation
//! strings and compiled into index tables at build time, so every lookup is a
//! plain array access.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 32-symbol geohash alphabet (no `a`, `i`, `l`, `o`).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

pub const DIRECTION_TOP: &str = "top";
pub const DIRECTION_RIGHT: &str = "right";
pub const DIRECTION_BOTTOM: &str = "bottom";
pub const DIRECTION_LEFT: &str = "left";

const NEIGHBOR_TOP: &[u8; 32] = b"p0r21436x8zb9dcf5h7kjnmqesgutwvy";
const NEIGHBOR_RIGHT: &[u8; 32] = b"bc01fg45238967deuvhjyznpkmstqrwx";
const NEIGHBOR_BOTTOM: &[u8; 32] = b"14365h7k9dcfesgujnmqp0r2twvyx8zb";
const NEIGHBOR_LEFT: &[u8; 32] = b"238967debc01fg45kmstqrwxuvhjyznp";

const BORDER_TOP: &[u8] = b"prxz";
const BORDER_RIGHT: &[u8] = b"bcfguvyz";
const BORDER_BOTTOM: &[u8] = b"028b";
const BORDER_LEFT: &[u8] = b"0145hjnp";

const INVALID: u8 = 0xFF;

/// ASCII byte -> 5-bit cell value, `INVALID` for anything outside the alphabet.
static DECODE: [u8; 128] = build_decode();

/// `STEPS[direction][parity][value]` is the value of the adjacent cell.
static STEPS: [[[u8; 32]; 2]; 4] = [
    [build_step(NEIGHBOR_TOP), build_step(NEIGHBOR_RIGHT)],
    [build_step(NEIGHBOR_RIGHT), build_step(NEIGHBOR_TOP)],
    [build_step(NEIGHBOR_BOTTOM), build_step(NEIGHBOR_LEFT)],
    [build_step(NEIGHBOR_LEFT), build_step(NEIGHBOR_BOTTOM)],
];

/// `BORDERS[direction][parity]` has bit `value` set for border cells.
static BORDERS: [[u32; 2]; 4] = [
    [border_mask(BORDER_TOP), border_mask(BORDER_RIGHT)],
    [border_mask(BORDER_RIGHT), border_mask(BORDER_TOP)],
    [border_mask(BORDER_BOTTOM), border_mask(BORDER_LEFT)],
    [border_mask(BORDER_LEFT), border_mask(BORDER_BOTTOM)],
];

const fn build_decode() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < 32 {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
}

// A permutation string lists, for each target value i, the source character
// whose neighbor is BASE32[i]. Inverting it gives source value -> target value.
const fn build_step(permutation: &[u8; 32]) -> [u8; 32] {
    let decode = build_decode();
    let mut step = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        step[decode[permutation[i] as usize] as usize] = i as u8;
        i += 1;
    }
    step
}

const fn border_mask(chars: &[u8]) -> u32 {
    let decode = build_decode();
    let mut mask = 0u32;
    let mut i = 0;
    while i < chars.len() {
        mask |= 1 << decode[chars[i] as usize];
        i += 1;
    }
    mask
}

/// One of the four axis-aligned directions a neighbor can be resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::Top => DIRECTION_TOP,
            Direction::Right => DIRECTION_RIGHT,
            Direction::Bottom => DIRECTION_BOTTOM,
            Direction::Left => DIRECTION_LEFT,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Whether a cell with this value sits on this edge of its parent.
    pub(crate) fn is_border(self, value: u8, parity: Parity) -> bool {
        BORDERS[self as usize][parity as usize] & (1 << value) != 0
    }

    /// Value of the adjacent cell, wrapping to the far side of the parent.
    pub(crate) fn step(self, value: u8, parity: Parity) -> u8 {
        STEPS[self as usize][parity as usize][value as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            DIRECTION_TOP => Ok(Direction::Top),
            DIRECTION_RIGHT => Ok(Direction::Right),
            DIRECTION_BOTTOM => Ok(Direction::Bottom),
            DIRECTION_LEFT => Ok(Direction::Left),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

/// Parity of a geohash length. With an even length the final character
/// carries three latitude bits, with an odd length three longitude bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

impl Parity {
    pub fn of(len: usize) -> Self {
        if len % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Look up the 5-bit value of a single geohash character.
#[inline]
pub fn char_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Convert a geohash into its cell values, rejecting foreign characters.
pub fn values(hash: &str) -> Result<Vec<u8>> {
    hash.chars()
        .enumerate()
        .map(|(position, character)| {
            char_value(character).ok_or_else(|| {
                tracing::debug!(%character, position, "rejected geohash character");
                Error::InvalidGeohashCharacter { character, position }
            })
        })
        .collect()
}

/// Render cell values back into a geohash string.
pub fn to_geohash(values: &[u8]) -> String {
    values.iter().map(|&v| BASE32[v as usize] as char).collect()
}
