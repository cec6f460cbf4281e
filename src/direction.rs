//! Directions and the circular index arithmetic shared by every engine.

use std::fmt;

/// Direction along a tab strip or along the window list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Step `index` by one in this direction, wrapping around `len`.
    ///
    /// `len` must be non-zero.
    pub fn step(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0, "cannot step through an empty sequence");
        match self {
            Direction::Next => {
                if index >= len - 1 {
                    0
                } else {
                    index + 1
                }
            }
            Direction::Prev => {
                if index == 0 || index > len - 1 {
                    len - 1
                } else {
                    index - 1
                }
            }
        }
    }

    /// Step from a position that may be unknown. An unknown position sits
    /// just before the first element, so `Next` lands on the first and
    /// `Prev` on the last.
    pub fn step_from(self, index: Option<usize>, len: usize) -> usize {
        match index {
            Some(i) => self.step(i, len),
            None => match self {
                Direction::Next => 0,
                Direction::Prev => len - 1,
            },
        }
    }

    /// Whether `index` is the last position reachable in this direction.
    pub fn is_edge(self, index: usize, len: usize) -> bool {
        match self {
            Direction::Next => index + 1 == len,
            Direction::Prev => index == 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => f.write_str("prev"),
            Direction::Next => f.write_str("next"),
        }
    }
}

/// Side a tab moves to within its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
