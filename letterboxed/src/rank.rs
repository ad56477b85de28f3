use crate::search::Solution;

/// Fewest words first, then fewest letters. Equal solutions stay in the
/// order they were found.
pub fn rank(mut solutions: Vec<Solution>) -> Vec<Solution> {
    solutions.sort_by_key(|solution| (solution.len(), solution.letter_count()));
    solutions
}
