//! Headings for an agent moving on a 2-D grid.
//!
//! The four canonical headings are kept in counter-clockwise order
//! (East, North, West, South), so turning left is one step forward through
//! [`ORIENTATIONS`] and turning right is one step back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HeadingError;
use crate::math::vector_add;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

/// Canonical headings in cyclic, counter-clockwise order.
pub const ORIENTATIONS: [Heading; 4] = [
    Heading::East,
    Heading::North,
    Heading::West,
    Heading::South,
];

/// Increment for a counter-clockwise quarter turn.
pub const LEFT: i32 = 1;
/// Increment for a clockwise quarter turn.
pub const RIGHT: i32 = -1;

impl Heading {
    /// Unit vector `(dx, dy)` for this heading.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::North => (0, 1),
            Heading::West => (-1, 0),
            Heading::South => (0, -1),
        }
    }

    fn index(self) -> usize {
        match self {
            Heading::East => 0,
            Heading::North => 1,
            Heading::West => 2,
            Heading::South => 3,
        }
    }

    pub fn left(self) -> Heading {
        turn_left(self)
    }

    pub fn right(self) -> Heading {
        turn_right(self)
    }

    /// Grid cell reached by taking one step from `pos` along this heading.
    pub fn advance(self, pos: (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.vector();
        let next = vector_add(&[pos.0, pos.1], &[dx, dy]);
        (next[0], next[1])
    }
}

impl TryFrom<(i32, i32)> for Heading {
    type Error = HeadingError;

    fn try_from(value: (i32, i32)) -> Result<Self, Self::Error> {
        ORIENTATIONS
            .iter()
            .copied()
            .find(|h| h.vector() == value)
            .ok_or(HeadingError::NotCanonical(value.0, value.1))
    }
}

impl From<Heading> for (i32, i32) {
    fn from(value: Heading) -> Self {
        value.vector()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::East => "East",
            Heading::North => "North",
            Heading::West => "West",
            Heading::South => "South",
        };
        f.pad(name)
    }
}

/// Rotate `heading` by `inc` quarter turns, positive being counter-clockwise.
pub fn turn_heading(heading: Heading, inc: i32) -> Heading {
    let n = ORIENTATIONS.len() as i64;
    let idx = (heading.index() as i64 + inc as i64).rem_euclid(n);
    ORIENTATIONS[idx as usize]
}

/// Rotate within an arbitrary cyclic list of headings.
///
/// Works for any heading representation, e.g. raw `(dx, dy)` tuples or an
/// eight-way compass.
pub fn turn_heading_in<T>(headings: &[T], heading: T, inc: i32) -> Result<T, HeadingError>
where
    T: Copy + PartialEq,
{
    if headings.is_empty() {
        return Err(HeadingError::EmptyHeadings);
    }
    let pos = headings
        .iter()
        .position(|h| *h == heading)
        .ok_or(HeadingError::UnknownHeading)?;
    let n = headings.len() as i64;
    let idx = (pos as i64 + inc as i64).rem_euclid(n);
    Ok(headings[idx as usize])
}

pub fn turn_left(heading: Heading) -> Heading {
    turn_heading(heading, LEFT)
}

pub fn turn_right(heading: Heading) -> Heading {
    turn_heading(heading, RIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_orientations() {
        for (i, h) in ORIENTATIONS.iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }

    #[test]
    fn test_turn_heading_wraps_large_increments() {
        assert_eq!(turn_heading(Heading::East, 5), Heading::North);
        assert_eq!(turn_heading(Heading::East, -6), Heading::West);
        assert_eq!(turn_heading(Heading::South, i32::MIN), Heading::South);
    }
}
