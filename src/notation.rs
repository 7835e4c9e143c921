//! Cube face notation letters
//!
//! Each cube color stands for the face whose center carries it, with the cube
//! held green in front and white on top.

use std::fmt;

use log::warn;

use crate::color::CubeColor;

/// One of the six face letters consumed by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NotationLetter {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl NotationLetter {
    /// All letters in solver facelet order (U, R, F, D, L, B)
    pub const ALL: [NotationLetter; 6] = [
        NotationLetter::Up,
        NotationLetter::Right,
        NotationLetter::Front,
        NotationLetter::Down,
        NotationLetter::Left,
        NotationLetter::Back,
    ];

    /// Position in [`NotationLetter::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            NotationLetter::Up => 'U',
            NotationLetter::Right => 'R',
            NotationLetter::Front => 'F',
            NotationLetter::Down => 'D',
            NotationLetter::Left => 'L',
            NotationLetter::Back => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        NotationLetter::ALL.into_iter().find(|l| l.as_char() == c)
    }
}

impl From<CubeColor> for NotationLetter {
    fn from(color: CubeColor) -> Self {
        match color {
            CubeColor::Green => NotationLetter::Front,
            CubeColor::White => NotationLetter::Up,
            CubeColor::Blue => NotationLetter::Back,
            CubeColor::Red => NotationLetter::Right,
            CubeColor::Orange => NotationLetter::Left,
            CubeColor::Yellow => NotationLetter::Down,
        }
    }
}

impl fmt::Display for NotationLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Notation letter for a color name
///
/// Unrecognized names map to [`NotationLetter::Front`] so one bad sticker
/// still yields a letter. The resulting state will be wrong in that position.
pub fn to_notation(color_name: &str) -> NotationLetter {
    match color_name.parse::<CubeColor>() {
        Ok(color) => color.into(),
        Err(_) => {
            warn!("unknown color name {:?}, defaulting to F", color_name);
            NotationLetter::Front
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_table() {
        assert_eq!(to_notation("green"), NotationLetter::Front);
        assert_eq!(to_notation("white"), NotationLetter::Up);
        assert_eq!(to_notation("blue"), NotationLetter::Back);
        assert_eq!(to_notation("red"), NotationLetter::Right);
        assert_eq!(to_notation("orange"), NotationLetter::Left);
        assert_eq!(to_notation("yellow"), NotationLetter::Down);
    }

    #[test]
    fn test_unknown_name_defaults_to_front() {
        assert_eq!(to_notation("unknown"), NotationLetter::Front);
        assert_eq!(to_notation(""), NotationLetter::Front);
    }

    #[test]
    fn test_mapping_is_bijective() {
        let mut letters: Vec<NotationLetter> =
            CubeColor::ALL.into_iter().map(NotationLetter::from).collect();
        letters.sort();
        assert_eq!(letters, NotationLetter::ALL.to_vec());
    }

    #[test]
    fn test_char_round_trip() {
        let letters: String = NotationLetter::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, "URFDLB");
        assert_eq!(NotationLetter::from_char('L'), Some(NotationLetter::Left));
        assert_eq!(NotationLetter::from_char('X'), None);
    }
}
