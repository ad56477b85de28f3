//! Letter Boxed solver.
//!
//! Letters sit on the sides of a box. A word is playable when each letter is
//! on a different side from the one before it, and words chain when each
//! starts with the last letter of the previous one. A solution is a chain
//! that uses every letter on the box.
//!
//! The pieces run in order: [`AdjacencyGraph::build`] from the sides,
//! [`candidates`] from a dictionary the caller supplies, then [`solve`].

pub mod adjacency;
pub mod filter;
pub mod letters;
pub mod puzzle;
pub mod rank;
pub mod search;

pub use adjacency::AdjacencyGraph;
pub use filter::{candidates, filter_words, is_admissible, rank_candidates, Candidate, CandidateList};
pub use letters::LetterSet;
pub use puzzle::{BoxError, LetterBox};
pub use rank::rank;
pub use search::{find_best_from_start, solve, ChainSearch, Solution, Solver, DEFAULT_MAX_WORDS};

/// Ranked solutions for `letter_box` using words from `dictionary`.
pub fn run<S: AsRef<str>>(letter_box: &LetterBox, dictionary: &[S], max_len: usize) -> Vec<Solution> {
    let graph = AdjacencyGraph::build(letter_box.sides());
    let candidates = candidates(dictionary, &graph);
    solve(&candidates, graph.letters(), max_len)
}
