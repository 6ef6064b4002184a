//! Core value types for Mastermind: combinations and feedback.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use crate::error::ParseError;

/// A peg color, counted from 1.
pub type Color = u8;

/// An ordered code of colored pegs, used for both secrets and guesses.
///
/// A combination is structural only: its length and color range are checked
/// against a [`GameConfiguration`](crate::GameConfiguration) when it becomes
/// part of a [`Round`](crate::Round).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(Vec<Color>);

impl Combination {
    /// Creates a combination from its pegs.
    pub fn new(pegs: Vec<Color>) -> Self {
        Self(pegs)
    }

    /// Returns the pegs in order.
    pub fn pegs(&self) -> &[Color] {
        &self.0
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the combination has no pegs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Color>> for Combination {
    fn from(pegs: Vec<Color>) -> Self {
        Self(pegs)
    }
}

impl<const N: usize> From<[Color; N]> for Combination {
    fn from(pegs: [Color; N]) -> Self {
        Self(pegs.to_vec())
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wide = self.0.iter().any(|c| *c > 9);
        for (i, peg) in self.0.iter().enumerate() {
            if wide && i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", peg)?;
        }
        Ok(())
    }
}

/// Parses `"1234"` (one digit per peg) or `"1,2,3,4"` / `"1 2 3 4"`.
impl FromStr for Combination {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let separated = s.contains(|c: char| c == ',' || c.is_whitespace());
        let pegs = if separated {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<Color>()
                        .map_err(|_| ParseError::InvalidPeg(part.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as Color)
                        .ok_or_else(|| ParseError::InvalidPeg(c.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self(pegs))
    }
}

/// Black and white peg counts returned for a guess.
///
/// `black` counts exact color-and-position matches, `white` counts color
/// matches at other positions once exact matches are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Exact matches.
    pub black: u8,
    /// Color-only matches.
    pub white: u8,
}

impl Feedback {
    /// Creates feedback from black and white counts.
    pub fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// Feedback for a guess that cracks a code of `number_of_dots` pegs.
    pub fn perfect(number_of_dots: u8) -> Self {
        Self::new(number_of_dots, 0)
    }

    /// Returns true if every one of `number_of_dots` pegs is an exact match.
    pub fn is_perfect(&self, number_of_dots: u8) -> bool {
        *self == Self::perfect(number_of_dots)
    }

    /// Total pegs awarded.
    pub fn total(&self) -> u16 {
        u16::from(self.black) + u16::from(self.white)
    }
}

impl From<(u8, u8)> for Feedback {
    fn from((black, white): (u8, u8)) -> Self {
        Self::new(black, white)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.black, self.white)
    }
}

/// Parses `"21"` or `"2,1"` / `"2 1"` as (black, white).
impl FromStr for Feedback {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts = Combination::from_str(s)?;
        match counts.pegs() {
            [black, white] => Ok(Self::new(*black, *white)),
            other => Err(ParseError::FeedbackArity(other.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let combo: Combination = "1234".parse().unwrap();
        assert_eq!(combo.pegs(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_separated() {
        let combo: Combination = "1, 2 ,3 4".parse().unwrap();
        assert_eq!(combo.pegs(), &[1, 2, 3, 4]);

        let wide: Combination = "10,2,11".parse().unwrap();
        assert_eq!(wide.pegs(), &[10, 2, 11]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Combination>(), Err(ParseError::Empty));
        assert!(matches!(
            "12a4".parse::<Combination>(),
            Err(ParseError::InvalidPeg(_))
        ));
        assert!(matches!(
            "1,-2".parse::<Combination>(),
            Err(ParseError::InvalidPeg(_))
        ));
    }

    #[test]
    fn test_display_uses_commas_for_wide_colors() {
        assert_eq!(Combination::from([1, 2, 3]).to_string(), "123");
        assert_eq!(Combination::from([1, 12, 3]).to_string(), "1,12,3");
    }

    #[test]
    fn test_parse_feedback() {
        assert_eq!("21".parse::<Feedback>(), Ok(Feedback::new(2, 1)));
        assert_eq!("0,4".parse::<Feedback>(), Ok(Feedback::new(0, 4)));
        assert_eq!("213".parse::<Feedback>(), Err(ParseError::FeedbackArity(3)));
    }

    #[test]
    fn test_perfect_feedback() {
        assert!(Feedback::new(4, 0).is_perfect(4));
        assert!(!Feedback::new(3, 1).is_perfect(4));
        assert!(!Feedback::new(4, 0).is_perfect(5));
    }
}
