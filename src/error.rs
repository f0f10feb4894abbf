use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidGeohashCharacter { character: char, position: usize },

    #[error("Empty geohash has no neighbors")]
    EmptyGeohash,

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn error_code(&self) -> i32 {
        match self {
            Error::InvalidGeohashCharacter { .. } => -1,
            Error::EmptyGeohash => -2,
            Error::UnknownDirection(_) => -3,
            Error::Config(_) => -4,
            Error::Io(_) => -5,
        }
    }
}
