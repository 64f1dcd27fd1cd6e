//! Letter grades and their ranking.
//!
//! A grade is one of A, B, C, D or F, optionally followed by `+` or `-`.
//! Ranking is letter first (A best), then the modifier: `B+` > `B` > `B-` > `C+`.

use crate::utils::config::GRADE_LETTERS;
use crate::utils::error::GradeError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Trailing `+`/`-` on a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Minus,
    Plain,
    Plus,
}

impl Modifier {
    fn step(self) -> i32 {
        match self {
            Modifier::Minus => -1,
            Modifier::Plain => 0,
            Modifier::Plus => 1,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Modifier::Minus => "-",
            Modifier::Plain => "",
            Modifier::Plus => "+",
        }
    }
}

/// A parsed letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grade {
    letter: char,
    modifier: Modifier,
}

impl Grade {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Combined rank, higher is better.
    ///
    /// Each letter spans three sub-steps so that `C+` never reaches `B-`.
    pub fn rank(&self) -> i32 {
        let position = GRADE_LETTERS
            .iter()
            .position(|letter| *letter == self.letter)
            .unwrap_or(GRADE_LETTERS.len());
        let base = (GRADE_LETTERS.len() - position) as i32 * 3;
        base + self.modifier.step()
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GradeError::Malformed(s.to_string());
        let mut chars = s.trim().chars();

        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| GRADE_LETTERS.contains(c))
            .ok_or_else(malformed)?;

        let modifier = match (chars.next(), chars.next()) {
            (None, _) => Modifier::Plain,
            (Some('+'), None) => Modifier::Plus,
            (Some('-'), None) => Modifier::Minus,
            _ => return Err(malformed()),
        };

        Ok(Self { letter, modifier })
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.modifier.suffix())
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
