use super::alphabet::{self, Direction, Parity};
use crate::config::FanOutMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The eight compass labels of a [`NeighborSet`], clockwise from top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::Top,
        Compass::TopRight,
        Compass::Right,
        Compass::BottomRight,
        Compass::Bottom,
        Compass::BottomLeft,
        Compass::Left,
        Compass::TopLeft,
    ];
}

/// All eight neighbors of a geohash, at the same precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSet {
    pub top: String,
    pub top_right: String,
    pub right: String,
    pub bottom_right: String,
    pub bottom: String,
    pub bottom_left: String,
    pub left: String,
    pub top_left: String,
}

impl NeighborSet {
    pub fn get(&self, compass: Compass) -> &str {
        match compass {
            Compass::Top => &self.top,
            Compass::TopRight => &self.top_right,
            Compass::Right => &self.right,
            Compass::BottomRight => &self.bottom_right,
            Compass::Bottom => &self.bottom,
            Compass::BottomLeft => &self.bottom_left,
            Compass::Left => &self.left,
            Compass::TopLeft => &self.top_left,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Compass, &str)> + '_ {
        Compass::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Resolve the geohash adjacent to `hash` in `direction`.
///
/// Longitude wraps at the antimeridian. Moving past a pole is not supported
/// and wraps within the top-level row instead.
pub fn neighbor(hash: &str, direction: Direction) -> Result<String> {
    let values = parse_nonempty(hash)?;
    Ok(alphabet::to_geohash(&shifted(&values, direction)))
}

/// Resolve all eight neighbors, fanning the work out over rayon.
pub fn neighbors(hash: &str) -> Result<NeighborSet> {
    neighbors_with(hash, FanOutMode::Parallel)
}

/// Resolve all eight neighbors with an explicit scheduling mode.
///
/// Top and bottom are resolved first; the diagonals are then the left and
/// right neighbors of those two, so every field agrees with [`neighbor`].
pub fn neighbors_with(hash: &str, mode: FanOutMode) -> Result<NeighborSet> {
    let center = parse_nonempty(hash)?;
    debug!(hash, ?mode, "resolving neighbor set");

    let set = match mode {
        FanOutMode::Sequential => {
            let top = shifted(&center, Direction::Top);
            let bottom = shifted(&center, Direction::Bottom);
            let (right, left) = sideways(&center);
            let (top_right, top_left) = sideways(&top);
            let (bottom_right, bottom_left) = sideways(&bottom);
            assemble(
                [top, bottom],
                [right, left, top_right, top_left, bottom_right, bottom_left],
            )
        }
        FanOutMode::Parallel => {
            let (top, bottom) = rayon::join(
                || shifted(&center, Direction::Top),
                || shifted(&center, Direction::Bottom),
            );
            let ((right, left), ((top_right, top_left), (bottom_right, bottom_left))) =
                rayon::join(
                    || par_sideways(&center),
                    || rayon::join(|| par_sideways(&top), || par_sideways(&bottom)),
                );
            assemble(
                [top, bottom],
                [right, left, top_right, top_left, bottom_right, bottom_left],
            )
        }
    };

    Ok(set)
}

fn parse_nonempty(hash: &str) -> Result<Vec<u8>> {
    if hash.is_empty() {
        debug!("neighbor requested for empty geohash");
        return Err(Error::EmptyGeohash);
    }
    alphabet::values(hash)
}

fn shifted(values: &[u8], direction: Direction) -> Vec<u8> {
    let mut out = values.to_vec();
    shift(&mut out, direction);
    out
}

// Replace the last cell with its neighbor. Border cells first move the
// parent prefix one cell over; a single character has no parent and wraps.
fn shift(values: &mut [u8], direction: Direction) {
    let len = values.len();
    let Some((last, parent)) = values.split_last_mut() else {
        return;
    };
    let parity = Parity::of(len);
    if direction.is_border(*last, parity) && !parent.is_empty() {
        trace!(depth = len - 1, %direction, "crossing parent border");
        shift(parent, direction);
    }
    *last = direction.step(*last, parity);
}

fn sideways(base: &[u8]) -> (Vec<u8>, Vec<u8>) {
    (
        shifted(base, Direction::Right),
        shifted(base, Direction::Left),
    )
}

fn par_sideways(base: &[u8]) -> (Vec<u8>, Vec<u8>) {
    rayon::join(
        || shifted(base, Direction::Right),
        || shifted(base, Direction::Left),
    )
}

fn assemble(vertical: [Vec<u8>; 2], rest: [Vec<u8>; 6]) -> NeighborSet {
    let [top, bottom] = vertical;
    let [right, left, top_right, top_left, bottom_right, bottom_left] = rest;
    NeighborSet {
        top: alphabet::to_geohash(&top),
        top_right: alphabet::to_geohash(&top_right),
        right: alphabet::to_geohash(&right),
        bottom_right: alphabet::to_geohash(&bottom_right),
        bottom: alphabet::to_geohash(&bottom),
        bottom_left: alphabet::to_geohash(&bottom_left),
        left: alphabet::to_geohash(&left),
        top_left: alphabet::to_geohash(&top_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_within_parent() {
        assert_eq!(neighbor("ezs42", Direction::Right).unwrap(), "ezs43");
        assert_eq!(neighbor("ezs42", Direction::Top).unwrap(), "ezs48");
        assert_eq!(neighbor("ezs42", Direction::Bottom).unwrap(), "ezs40");
    }

    #[test]
    fn test_neighbor_crosses_parent_border() {
        assert_eq!(neighbor("ezs42", Direction::Left).unwrap(), "ezefr");
        assert_eq!(neighbor("sb", Direction::Right).unwrap(), "t0");
        assert_eq!(neighbor("u000", Direction::Bottom).unwrap(), "spbp");
        assert_eq!(neighbor("u000", Direction::Left).unwrap(), "gbpb");
    }

    #[test]
    fn test_single_character_wraps_longitude() {
        assert_eq!(neighbor("0", Direction::Left).unwrap(), "p");
        assert_eq!(neighbor("p", Direction::Right).unwrap(), "0");
        assert_eq!(neighbor("z", Direction::Right).unwrap(), "b");
    }

    #[test]
    fn test_neighbor_set_known_hash() {
        let set = neighbors("ezs42").unwrap();
        assert_eq!(
            set,
            NeighborSet {
                top: "ezs48".into(),
                top_right: "ezs49".into(),
                right: "ezs43".into(),
                bottom_right: "ezs41".into(),
                bottom: "ezs40".into(),
                bottom_left: "ezefp".into(),
                left: "ezefr".into(),
                top_left: "ezefx".into(),
            }
        );
    }

    #[test]
    fn test_modes_agree() {
        for hash in ["0", "zz", "u000", "9q8yy", "gbsuv", "u4pruydqqvj"] {
            assert_eq!(
                neighbors_with(hash, FanOutMode::Sequential).unwrap(),
                neighbors_with(hash, FanOutMode::Parallel).unwrap(),
            );
        }
    }

    #[test]
    fn test_neighbor_set_iteration_order() {
        let set = neighbors("s").unwrap();
        let collected: Vec<_> = set.iter().map(|(_, h)| h.to_string()).collect();
        assert_eq!(collected, ["u", "v", "t", "m", "k", "7", "e", "g"]);
        assert_eq!(set.get(Compass::BottomLeft), "7");
    }

    #[test]
    fn test_empty_and_invalid_input() {
        assert!(matches!(neighbor("", Direction::Top), Err(Error::EmptyGeohash)));
        assert!(matches!(neighbors(""), Err(Error::EmptyGeohash)));
        assert!(matches!(
            neighbors("ez!42"),
            Err(Error::InvalidGeohashCharacter {
                character: '!',
                position: 2
            })
        ));
    }
}
