//! Recursive search for the shortest word chains that cover a box.
//!
//! A chain is extended only with words that start on the previous word's
//! last letter and add at least one uncovered letter. At each level the first
//! word that finishes the cover is returned straight away, without looking
//! at its later siblings. Otherwise every sibling is tried, and each one may
//! only use fewer words than the best chain found so far at that level.

use std::collections::HashMap;
use std::fmt::{self, Display};

use indicatif::ProgressBar;
use log::{debug, trace};
use rayon::prelude::*;

use crate::filter::CandidateList;
use crate::letters::LetterSet;
use crate::rank::rank;

pub const DEFAULT_MAX_WORDS: usize = 5;

/// A chain of words that uses every letter on the box.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    pub fn new(words: Vec<String>) -> Self {
        Solution { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total letters typed, counting repeats.
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(|word| word.chars().count()).sum()
    }

    pub fn letters(&self) -> LetterSet {
        self.words.iter().flat_map(|word| word.chars()).collect()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" - "))
    }
}

impl From<Solution> for Vec<String> {
    fn from(value: Solution) -> Self {
        value.words
    }
}

type MemoKey = (char, LetterSet, usize);

/// Chain search over one candidate list.
///
/// Remembers the best continuation for every (last letter, uncovered
/// letters, words left) it has answered, so one instance can serve many
/// start words. The answer to such a question never depends on the words
/// before it, so reuse cannot change what is returned.
pub struct ChainSearch<'a> {
    candidates: &'a CandidateList,
    memo: HashMap<MemoKey, Option<Vec<usize>>>,
}

impl<'a> ChainSearch<'a> {
    pub fn new(candidates: &'a CandidateList) -> Self {
        ChainSearch {
            candidates,
            memo: HashMap::new(),
        }
    }

    /// Best chain starting with `word` that covers `all_letters` in at most
    /// `max_len` words.
    pub fn find_best_from_start(
        &mut self,
        word: &str,
        all_letters: LetterSet,
        max_len: usize,
    ) -> Option<Solution> {
        if max_len == 0 {
            return None;
        }

        let uncovered = all_letters.difference(&word.chars().collect());
        if uncovered.is_empty() {
            return Some(Solution::new(vec![word.to_owned()]));
        }

        let last = word.chars().next_back()?;
        let rest = self.extend(last, uncovered, max_len - 1)?;

        let mut words = Vec::with_capacity(rest.len() + 1);
        words.push(word.to_owned());
        words.extend(rest.iter().map(|&idx| self.candidates[idx].word().to_owned()));
        Some(Solution::new(words))
    }

    /// Best continuation after a word ending in `last`, as candidate indices,
    /// using at most `remaining` more words.
    fn extend(&mut self, last: char, uncovered: LetterSet, remaining: usize) -> Option<Vec<usize>> {
        if remaining == 0 {
            return None;
        }

        let key = (last, uncovered, remaining);
        if let Some(found) = self.memo.get(&key) {
            return found.clone();
        }

        let found = self.search(last, uncovered, remaining);
        self.memo.insert(key, found.clone());
        found
    }

    fn search(&mut self, last: char, uncovered: LetterSet, remaining: usize) -> Option<Vec<usize>> {
        let candidates = self.candidates;

        let mut best: Option<Vec<usize>> = None;
        let mut best_len = remaining + 1;
        for &idx in candidates.starting_with(last) {
            let candidate = &candidates[idx];
            if candidate.letters().is_disjoint(&uncovered) {
                continue;
            }

            let left = uncovered.difference(&candidate.letters());
            if left.is_empty() {
                return Some(vec![idx]);
            }

            // Anything after this word must beat the best chain so far.
            if let Some(rest) = self.extend(candidate.last(), left, best_len.saturating_sub(2)) {
                let mut chain = Vec::with_capacity(rest.len() + 1);
                chain.push(idx);
                chain.extend(rest);
                best_len = chain.len();
                best = Some(chain);
            }
        }

        best
    }
}

/// Runs the chain search from every candidate as the first word.
pub struct Solver<'a> {
    candidates: &'a CandidateList,
    all_letters: LetterSet,
    max_len: usize,
}

impl<'a> Solver<'a> {
    pub fn new(candidates: &'a CandidateList, all_letters: LetterSet, max_len: usize) -> Self {
        Solver {
            candidates,
            all_letters,
            max_len,
        }
    }

    /// Every start word's best solution, ranked. Start words are searched in
    /// parallel but collected in candidate order, so the result is the same
    /// as a sequential run. Different start words may produce equal chains;
    /// all of them are kept.
    pub fn solve(&self, show_progress: bool) -> Vec<Solution> {
        let progress_bar = if show_progress {
            ProgressBar::new(self.candidates.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let found: Vec<Option<Solution>> = self
            .candidates
            .as_slice()
            .par_iter()
            .map_init(
                || ChainSearch::new(self.candidates),
                |search, candidate| {
                    let solution =
                        search.find_best_from_start(candidate.word(), self.all_letters, self.max_len);
                    trace!("{} -> {:?}", candidate.word(), solution);
                    progress_bar.inc(1);
                    solution
                },
            )
            .collect();
        progress_bar.finish_and_clear();

        let solutions: Vec<Solution> = found.into_iter().flatten().collect();
        debug!(
            "{} of {} start words lead to a solution within {} words",
            solutions.len(),
            self.candidates.len(),
            self.max_len
        );

        rank(solutions)
    }
}

pub fn find_best_from_start(
    word: &str,
    candidates: &CandidateList,
    all_letters: LetterSet,
    max_len: usize,
) -> Option<Solution> {
    ChainSearch::new(candidates).find_best_from_start(word, all_letters, max_len)
}

/// Ranked solutions covering `all_letters` in at most `max_len` words.
pub fn solve(candidates: &CandidateList, all_letters: LetterSet, max_len: usize) -> Vec<Solution> {
    Solver::new(candidates, all_letters, max_len).solve(false)
}
