//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the board as (rank, file), both 1-based.
///
/// Rank 1 is White's back rank and file 1 is the a-file. A `Position` can only
/// be built through checked constructors, so every value is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// a1; also the filler value for unused move-list slots
    pub(crate) const CORNER: Position = Position { rank: 1, file: 1 };

    /// Create a position, or `None` if either coordinate is outside 1..=8
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank >= 1 && rank <= 8 && file >= 1 && file <= 8 {
            Some(Position { rank, file })
        } else {
            None
        }
    }

    /// Rank (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// File (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Step by a (rank, file) delta, or `None` when that leaves the board
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let (rank, file) = match (
            (self.rank as i8).checked_add(d_rank),
            (self.file as i8).checked_add(d_file),
        ) {
            (Some(rank), Some(file)) => (rank, file),
            _ => return None,
        };
        if rank < 1 || rank > 8 || file < 1 || file > 8 {
            return None;
        }
        Some(Position {
            rank: rank as u8,
            file: file as u8,
        })
    }

    /// All 64 positions, rank 1 first, files a to h within a rank
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|rank| (1..=8u8).map(move |file| Position { rank, file }))
    }

    #[inline]
    pub(crate) const fn row_index(self) -> usize {
        (self.rank - 1) as usize
    }

    #[inline]
    pub(crate) const fn col_index(self) -> usize {
        (self.file - 1) as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&rank) {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        if !(1..=8).contains(&file) {
            return Err(PositionError::FileOutOfBounds { file });
        }
        Ok(Position { rank, file })
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.rank, pos.file)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'0',
            _ => return Err(invalid()),
        };
        Ok(Position { rank, file })
    }
}
