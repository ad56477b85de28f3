use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

use crate::letters::LetterSet;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    #[error("a letter box needs at least one side")]
    NoSides,
    #[error("side {0} has no letters")]
    EmptySide(usize),
    #[error("'{letter}' on side {side} is not a letter")]
    InvalidLetter { side: usize, letter: char },
    #[error("'{0}' appears on more than one side")]
    DuplicateLetter(char),
}

/// A validated Letter Boxed puzzle: each letter lowercase and on exactly one
/// side. Side numbers in errors are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterBox {
    sides: Vec<LetterSet>,
}

impl LetterBox {
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, BoxError> {
        if sides.is_empty() {
            return Err(BoxError::NoSides);
        }

        let mut seen = LetterSet::new();
        let mut parsed = Vec::with_capacity(sides.len());
        for (idx, side) in sides.iter().enumerate() {
            let mut letters = LetterSet::new();
            for letter in side.as_ref().chars().flat_map(char::to_lowercase) {
                if LetterSet::index(letter).is_none() {
                    return Err(BoxError::InvalidLetter {
                        side: idx + 1,
                        letter,
                    });
                }
                if seen.contains(letter) {
                    return Err(BoxError::DuplicateLetter(letter));
                }
                letters.insert(letter);
            }
            if letters.is_empty() {
                return Err(BoxError::EmptySide(idx + 1));
            }
            seen = seen.union(&letters);
            parsed.push(letters);
        }

        Ok(LetterBox { sides: parsed })
    }

    pub fn sides(&self) -> &[LetterSet] {
        &self.sides
    }

    pub fn all_letters(&self) -> LetterSet {
        self.sides
            .iter()
            .fold(LetterSet::new(), |acc, side| acc.union(side))
    }
}

impl FromStr for LetterBox {
    type Err = BoxError;

    /// Sides separated by whitespace or commas, e.g. `"apl bec ndf ghi"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|side| !side.is_empty())
            .collect();
        LetterBox::new(&sides)
    }
}

impl Display for LetterBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides: Vec<String> = self.sides.iter().map(|side| side.to_string()).collect();
        f.write_str(&sides.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let letter_box = LetterBox::new(&["apl", "bec", "ndf", "ghi"]).unwrap();
        assert_eq!(letter_box.sides().len(), 4);
        assert_eq!(letter_box.all_letters().to_string(), "abcdefghilnp");
    }

    #[test]
    fn test_case_insensitive() {
        let upper = LetterBox::new(&["APL", "Bec"]).unwrap();
        let lower = LetterBox::new(&["apl", "bec"]).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_side_counts_are_not_fixed() {
        let letter_box = LetterBox::new(&["ab", "cdef", "g"]).unwrap();
        assert_eq!(letter_box.sides().len(), 3);
        assert_eq!(letter_box.all_letters().len(), 7);
    }

    #[test]
    fn test_repeated_letter_on_one_side() {
        let letter_box = LetterBox::new(&["aap", "bec"]).unwrap();
        assert_eq!(letter_box.sides()[0].to_string(), "ap");
    }

    #[test]
    fn test_duplicate_letter() {
        assert_eq!(
            LetterBox::new(&["apl", "bea"]),
            Err(BoxError::DuplicateLetter('a'))
        );
    }

    #[test]
    fn test_invalid_letter() {
        assert_eq!(
            LetterBox::new(&["apl", "b3c"]),
            Err(BoxError::InvalidLetter {
                side: 2,
                letter: '3'
            })
        );
    }

    #[test]
    fn test_accented_letter() {
        assert_eq!(
            LetterBox::new(&["apl", "béc"]),
            Err(BoxError::InvalidLetter {
                side: 2,
                letter: 'é'
            })
        );
    }

    #[test]
    fn test_empty() {
        let no_sides: [&str; 0] = [];
        assert_eq!(LetterBox::new(&no_sides), Err(BoxError::NoSides));
        assert_eq!(LetterBox::new(&["abc", ""]), Err(BoxError::EmptySide(2)));
    }

    #[test]
    fn test_from_str() {
        let letter_box: LetterBox = "apl, BEC ndf\tghi".parse().unwrap();
        assert_eq!(letter_box.to_string(), "alp bce dfn ghi");
        assert_eq!("".parse::<LetterBox>(), Err(BoxError::NoSides));
    }
}
