//! Text notation for moves and dimensions.
//!
//! A move is an optional 1-based layer number, a face symbol, and an optional
//! `'` for counterclockwise: `R`, `U'`, `2F`, `3B'`. A move sequence is moves
//! separated by whitespace. Dimensions are written either as a single side
//! length (`3`) or as `XxYxZ` (`2x3x4`).

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{CubeError, Dimensions, Face, Move};

/// Error parsing moves or dimensions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty string where a move was expected.
    #[error("empty move")]
    Empty,
    /// Layer number without a face after it.
    #[error("missing face after layer in {0:?}")]
    MissingFace(String),
    /// Layer number that is zero or too large.
    #[error("invalid layer {0:?}; layers are numbered starting at 1")]
    BadLayer(String),
    /// Extra characters after a move.
    #[error("unexpected {0:?} after move")]
    Trailing(String),
    /// Dimensions not of the form `N` or `XxYxZ`.
    #[error("invalid size {0:?}; expected N or XxYxZ")]
    BadDimensions(String),
    /// Well-formed text naming something invalid.
    #[error(transparent)]
    Cube(#[from] CubeError),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layer > 0 {
            write!(f, "{}", u32::from(self.layer) + 1)?;
        }
        write!(f, "{}", self.face)?;
        if !self.clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (prefix, rest) = s.split_at(digits_end);
        let layer = match prefix {
            "" => 0,
            _ => prefix
                .parse::<u16>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| ParseError::BadLayer(prefix.to_owned()))?,
        };

        let mut chars = rest.chars();
        let face_char = chars
            .next()
            .ok_or_else(|| ParseError::MissingFace(s.to_owned()))?;
        let face = Face::try_from(face_char)?;

        let clockwise = match chars.as_str() {
            "" => true,
            "'" => false,
            trailing => return Err(ParseError::Trailing(trailing.to_owned())),
        };

        Ok(Move::new(face, layer, clockwise))
    }
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of moves, separated by spaces.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

impl FromStr for Dimensions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::BadDimensions(s.to_owned());
        let lens: Vec<u16> = s
            .trim()
            .split(['x', 'X'])
            .map(|part| part.trim().parse().map_err(|_| bad()))
            .collect::<Result<_, _>>()?;
        Ok(match lens[..] {
            [n] => Dimensions::cube(n)?,
            [x, y, z] => Dimensions::new(x, y, z)?,
            _ => return Err(bad()),
        })
    }
}
