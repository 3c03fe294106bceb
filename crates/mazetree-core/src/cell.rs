//! The [`CellKind`] type — what occupies a present maze coordinate.

use std::fmt;

/// Classification of a coordinate that is present in a maze.
///
/// Blank characters are not cells at all: they are never stored, so there
/// is no `Absent` variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Start,
    End,
    Path,
}

impl CellKind {
    /// Map a maze text character to its kind.
    ///
    /// Returns `Ok(None)` for a blank and `Err(ch)` for a character that is
    /// not allowed in maze text.
    #[inline]
    pub const fn from_char(ch: char) -> Result<Option<Self>, char> {
        match ch {
            'S' => Ok(Some(CellKind::Start)),
            'E' => Ok(Some(CellKind::End)),
            '#' => Ok(Some(CellKind::Path)),
            ' ' => Ok(None),
            other => Err(other),
        }
    }

    /// The character this kind is written as in maze text.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Path => '#',
        }
    }

    /// Whether this is one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Start => f.write_str("START"),
            CellKind::End => f.write_str("END"),
            CellKind::Path => f.write_str("#"),
        }
    }
}
