use std::cmp::Reverse;

use log::debug;

use crate::adjacency::AdjacencyGraph;
use crate::letters::LetterSet;

pub const MIN_WORD_LEN: usize = 3;

/// A playable word with the facts the search keeps asking about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    word: String,
    letters: LetterSet,
    first: char,
    last: char,
}

impl Candidate {
    /// `None` for an empty word or one with anything but lowercase letters.
    pub fn new(word: String) -> Option<Self> {
        let letters = LetterSet::from_word(&word)?;
        let first = word.chars().next()?;
        let last = word.chars().next_back()?;
        Some(Candidate {
            word,
            letters,
            first,
            last,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn first(&self) -> char {
        self.first
    }

    pub fn last(&self) -> char {
        self.last
    }
}

/// Playable words in search order. Built once per box and never changed.
#[derive(Clone, Debug)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
    by_first: [Vec<usize>; 26],
}

impl CandidateList {
    /// Keeps `words` in the order given. Words that cannot be candidates at
    /// all (empty, or not lowercase ASCII) are dropped.
    pub fn new(words: Vec<String>) -> Self {
        let candidates: Vec<Candidate> = words.into_iter().filter_map(Candidate::new).collect();

        let mut by_first: [Vec<usize>; 26] = std::array::from_fn(|_| Vec::new());
        for (idx, candidate) in candidates.iter().enumerate() {
            if let Some(row) = LetterSet::index(candidate.first) {
                by_first[row].push(idx);
            }
        }

        CandidateList {
            candidates,
            by_first,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(Candidate::word)
    }

    /// Indices of the candidates beginning with `letter`, in list order.
    pub fn starting_with(&self, letter: char) -> &[usize] {
        match LetterSet::index(letter) {
            Some(row) => &self.by_first[row],
            None => &[],
        }
    }
}

impl std::ops::Index<usize> for CandidateList {
    type Output = Candidate;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.candidates[idx]
    }
}

/// Whether `word` can be played on the box described by `graph`: at least
/// three letters, all of them on the box, no letter doubled, and each letter
/// on a different side from the one before it.
pub fn is_admissible(word: &str, graph: &AdjacencyGraph) -> bool {
    if word.chars().count() < MIN_WORD_LEN {
        return false;
    }
    if !word.chars().all(|c| graph.letters().contains(c)) {
        return false;
    }

    word.chars()
        .zip(word.chars().skip(1))
        .all(|(a, b)| a != b && graph.follows(a, b))
}

/// Admissible words of `dictionary`, in dictionary order.
pub fn filter_words<S: AsRef<str>>(dictionary: &[S], graph: &AdjacencyGraph) -> Vec<String> {
    dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| is_admissible(word, graph))
        .map(str::to_owned)
        .collect()
}

/// Orders words by distinct letters (most first), then length (shortest
/// first). Ties keep their incoming order.
///
/// Words that retire many letters quickly get tried first, which tends to
/// find short chains early and tighten the search budget sooner.
pub fn rank_candidates(mut words: Vec<String>) -> Vec<String> {
    words.sort_by_key(|word| {
        let distinct: LetterSet = word.chars().collect();
        (Reverse(distinct.len()), word.chars().count())
    });
    words
}

/// Filters `dictionary` for the box and puts the survivors in search order.
pub fn candidates<S: AsRef<str>>(dictionary: &[S], graph: &AdjacencyGraph) -> CandidateList {
    let words = filter_words(dictionary, graph);
    debug!(
        "{} of {} dictionary words are playable on {}",
        words.len(),
        dictionary.len(),
        graph.letters()
    );

    CandidateList::new(rank_candidates(words))
}
