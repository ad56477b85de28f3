use std::fmt;

/// A set of lowercase ASCII letters packed into the low 26 bits of a `u32`.
///
/// Only `a..=z` count as letters. Puzzles and word lists are English, and
/// anything else (accented letters included) is treated as off the box, so
/// `LetterBox` rejects it and words containing it are never playable.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    pub fn new() -> Self {
        LetterSet(0)
    }

    /// Bit index for `c`, or `None` for anything outside `a..=z`.
    pub fn index(c: char) -> Option<usize> {
        if c.is_ascii_lowercase() {
            Some(c as usize - 'a' as usize)
        } else {
            None
        }
    }

    /// Letters of `word`, or `None` if any of them is not a lowercase letter.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut set = LetterSet::new();
        for c in word.chars() {
            if !set.insert(c) && LetterSet::index(c).is_none() {
                return None;
            }
        }
        Some(set)
    }

    /// Adds `c`. Returns false when `c` was already present or is not a
    /// lowercase letter.
    pub fn insert(&mut self, c: char) -> bool {
        match LetterSet::index(c) {
            Some(idx) if !self.has_index(idx) => {
                self.0 |= 1 << idx;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        LetterSet::index(c).is_some_and(|idx| self.has_index(idx))
    }

    fn has_index(&self, idx: usize) -> bool {
        self.0 & (1 << idx) != 0
    }

    pub fn union(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    pub fn difference(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 & !other.0)
    }

    pub fn is_disjoint(&self, other: &LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> {
        let value = self.0;
        (0..26u8)
            .filter(move |idx| value & (1 << idx) != 0)
            .map(|idx| (b'a' + idx) as char)
    }
}

impl FromIterator<char> for LetterSet {
    /// Characters outside `a..=z` are dropped.
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = LetterSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.letters().collect::<String>())
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let set = LetterSet::new();
        assert_eq!(set.0, 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = LetterSet::new();
        assert!(set.insert('a'));
        assert_eq!(set.0, 1);

        assert!(set.insert('c'));
        assert_eq!(set.0, 5);

        assert!(!set.insert('c'));
        assert_eq!(set.0, 5);
    }

    #[test]
    fn test_insert_rejects_non_letters() {
        let mut set = LetterSet::new();
        assert!(!set.insert('A'));
        assert!(!set.insert('-'));
        assert!(!set.insert('é'));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_word() {
        assert_eq!(LetterSet::from_word("banana").unwrap().to_string(), "abn");
        assert!(LetterSet::from_word("naïve").is_none());
        assert!(LetterSet::from_word("Cat").is_none());
        assert_eq!(LetterSet::from_word(""), Some(LetterSet::EMPTY));
    }

    #[test]
    fn test_set_operations() {
        let first: LetterSet = "abfh".chars().collect();
        let second: LetterSet = "bfgz".chars().collect();

        assert_eq!(first.union(&second).to_string(), "abfghz");
        assert_eq!(first.difference(&second).to_string(), "ah");
        assert!(!first.is_disjoint(&second));
        assert!(first.is_disjoint(&"xyz".chars().collect()));
    }

    #[test]
    fn test_letters() {
        let set: LetterSet = "zebra".chars().collect();
        let letters: Vec<char> = set.letters().collect();
        assert_eq!(letters, vec!['a', 'b', 'e', 'r', 'z']);
        assert_eq!(set.len(), 5);
        assert!(set.contains('z'));
        assert!(!set.contains('y'));
        assert!(!set.contains('Z'));
    }
}
