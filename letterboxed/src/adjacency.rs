use crate::letters::LetterSet;

/// Which letters may follow which: every letter may be followed by any letter
/// on a different side of the box.
///
/// Sides are trusted as given. A letter listed on two sides ends up adjacent
/// to the letters of every side other than each of them, so callers that
/// take letters from users should build through
/// [`LetterBox`](crate::LetterBox), which rejects that input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    next: [LetterSet; 26],
    letters: LetterSet,
}

impl AdjacencyGraph {
    pub fn build(sides: &[LetterSet]) -> Self {
        let mut next = [LetterSet::EMPTY; 26];
        let mut letters = LetterSet::new();

        for (idx, side) in sides.iter().enumerate() {
            let others = sides
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != idx)
                .fold(LetterSet::new(), |acc, (_, other)| acc.union(other));

            for letter in side.letters() {
                if let Some(row) = LetterSet::index(letter) {
                    next[row] = next[row].union(&others);
                }
            }
            letters = letters.union(side);
        }

        AdjacencyGraph { next, letters }
    }

    /// Every letter on the box.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Letters allowed after `letter`, or `None` if `letter` is not on the box.
    pub fn next(&self, letter: char) -> Option<LetterSet> {
        if !self.letters.contains(letter) {
            return None;
        }
        LetterSet::index(letter).map(|row| self.next[row])
    }

    pub fn follows(&self, letter: char, next: char) -> bool {
        self.next(letter).is_some_and(|allowed| allowed.contains(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(sides: &[&str]) -> Vec<LetterSet> {
        sides.iter().map(|side| side.chars().collect()).collect()
    }

    #[test]
    fn test_build() {
        let graph = AdjacencyGraph::build(&sides(&["apl", "bec", "ndf", "ghi"]));
        assert_eq!(graph.letters().to_string(), "abcdefghilnp");
        assert_eq!(graph.next('a').unwrap().to_string(), "bcdefghin");
        assert_eq!(graph.next('e').unwrap().to_string(), "adfghilnp");
        assert_eq!(graph.next('z'), None);
    }

    #[test]
    fn test_same_side_never_adjacent() {
        let box_sides = sides(&["apl", "bec", "ndf", "ghi"]);
        let graph = AdjacencyGraph::build(&box_sides);
        for side in &box_sides {
            for a in side.letters() {
                for b in side.letters() {
                    assert!(!graph.follows(a, b), "{} -> {}", a, b);
                    assert!(!graph.follows(b, a), "{} -> {}", b, a);
                }
            }
        }
    }

    #[test]
    fn test_different_sides_always_adjacent() {
        let graph = AdjacencyGraph::build(&sides(&["ab", "c", "def"]));
        assert!(graph.follows('a', 'c'));
        assert!(graph.follows('c', 'f'));
        assert!(graph.follows('f', 'b'));
        assert!(!graph.follows('d', 'e'));
    }

    #[test]
    fn test_single_side_has_no_edges() {
        let graph = AdjacencyGraph::build(&sides(&["abc"]));
        assert_eq!(graph.letters().len(), 3);
        assert!(graph.next('a').unwrap().is_empty());
    }

    #[test]
    fn test_no_sides() {
        let graph = AdjacencyGraph::build(&[]);
        assert!(graph.letters().is_empty());
        assert_eq!(graph.next('a'), None);
    }

    #[test]
    fn test_letter_on_two_sides_is_not_rejected() {
        let graph = AdjacencyGraph::build(&sides(&["ab", "ac", "d"]));
        assert_eq!(graph.next('a').unwrap().to_string(), "abcd");
    }
}
