//! Spelling Bee word finder.
//!
//! Words must be at least four letters long, use the center letter, and use
//! nothing but the center and outer letters. Pangrams, which use every
//! letter, come first, then longer words before shorter ones.

use std::{cmp::Reverse, collections::HashSet, str::FromStr};

use log::debug;
use thiserror::Error;

pub const MIN_WORD_LEN: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LetterBankError {
    #[error("no letters given")]
    Empty,
    #[error("'{0}' is not a letter from a to z")]
    InvalidLetter(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterBank {
    center: char,
    outer: HashSet<char>,
}

impl FromStr for LetterBank {
    type Err = LetterBankError;

    /// The first letter is the center letter, e.g. `"aplebn"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .flat_map(char::to_lowercase);
        let center = letters.next().ok_or(LetterBankError::Empty)?;
        let outer: Vec<char> = letters.collect();

        if let Some(&bad) = std::iter::once(&center)
            .chain(outer.iter())
            .find(|c| !c.is_ascii_lowercase())
        {
            return Err(LetterBankError::InvalidLetter(bad));
        }

        Ok(LetterBank::new(center, outer))
    }
}

impl LetterBank {
    pub fn new(center: char, outer: impl IntoIterator<Item = char>) -> Self {
        let center = center.to_lowercase().next().unwrap_or(center);
        let outer = outer
            .into_iter()
            .flat_map(char::to_lowercase)
            .filter(|&c| c != center)
            .collect();

        LetterBank { center, outer }
    }

    pub fn center(&self) -> char {
        self.center
    }

    pub fn outer(&self) -> &HashSet<char> {
        &self.outer
    }

    fn allows(&self, c: char) -> bool {
        c == self.center || self.outer.contains(&c)
    }

    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LEN
            && word.contains(self.center)
            && word.chars().all(|c| self.allows(c))
    }

    pub fn is_pangram(&self, word: &str) -> bool {
        let used: HashSet<char> = word.chars().collect();
        used.contains(&self.center) && self.outer.is_subset(&used)
    }
}

pub struct SpellingBeeSolver {
    letters: LetterBank,
}

impl SpellingBeeSolver {
    pub fn new(letters: LetterBank) -> Self {
        SpellingBeeSolver { letters }
    }

    /// Matching words from `word_bank`, pangrams first, then longest first.
    /// Ties keep word bank order.
    pub fn solve<S: AsRef<str>>(&self, word_bank: &[S]) -> Vec<String> {
        let mut words: Vec<String> = word_bank
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| self.letters.matches(word))
            .map(str::to_owned)
            .collect();
        words.sort_by_key(|word| {
            (
                Reverse(self.letters.is_pangram(word)),
                Reverse(word.chars().count()),
            )
        });
        debug!("{} of {} words match", words.len(), word_bank.len());

        words
    }
}
