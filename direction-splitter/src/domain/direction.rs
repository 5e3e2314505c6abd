//! Direction labels and the feed's raw direction flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rider-facing travel direction.
///
/// Every trip leaves the core labelled with exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// All directions, in the order heading prefixes are tested.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Returns the direction travelling the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Lowercase cardinal word, as it appears at the start of headings.
    pub fn cardinal_word(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }

    /// Returns the direction whose cardinal word starts `text`.
    ///
    /// Leading and trailing whitespace is ignored and the match is
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use direction_splitter::domain::Direction;
    ///
    /// assert_eq!(Direction::from_cardinal_prefix("  Eastbound"), Some(Direction::East));
    /// assert_eq!(Direction::from_cardinal_prefix("NORTH - 510 Spadina"), Some(Direction::North));
    /// assert_eq!(Direction::from_cardinal_prefix("Towards Downtown"), None);
    /// ```
    pub fn from_cardinal_prefix(text: &str) -> Option<Self> {
        let text = text.trim();
        Direction::ALL.into_iter().find(|direction| {
            let word = direction.cardinal_word();
            text.get(..word.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::East => "East",
            Direction::West => "West",
            Direction::North => "North",
            Direction::South => "South",
        };
        f.write_str(s)
    }
}

/// Error returned for a direction flag other than 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction flag {0}: must be 0 or 1")]
pub struct InvalidDirectionFlag(pub u8);

/// The feed's raw binary direction indicator.
///
/// Inbound/outbound are arbitrary per feed, so the flag carries no
/// direction meaning on its own; it only becomes a label through a
/// per-route override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DirectionFlag {
    Zero,
    One,
}

impl DirectionFlag {
    /// Parse the raw 0/1 value.
    pub fn from_raw(raw: u8) -> Result<Self, InvalidDirectionFlag> {
        match raw {
            0 => Ok(DirectionFlag::Zero),
            1 => Ok(DirectionFlag::One),
            other => Err(InvalidDirectionFlag(other)),
        }
    }

    /// Returns the raw 0/1 value.
    pub fn raw(self) -> u8 {
        match self {
            DirectionFlag::Zero => 0,
            DirectionFlag::One => 1,
        }
    }
}

impl TryFrom<u8> for DirectionFlag {
    type Error = InvalidDirectionFlag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DirectionFlag::from_raw(value)
    }
}

impl From<DirectionFlag> for u8 {
    fn from(value: DirectionFlag) -> Self {
        value.raw()
    }
}

impl fmt::Display for DirectionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
