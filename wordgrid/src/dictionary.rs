use std::collections::BTreeSet;

use crate::{LetterFromStrErr, Word};

/// The word membership oracle consulted when checking and searching moves.
pub trait Dictionary {
    fn contains(&self, word: &Word) -> bool;

    /// All words, for move search to enumerate.
    ///
    /// The sequence must be finite, and calling this again starts over.
    fn candidates(&self) -> impl Iterator<Item = &Word>;
}

/// A dictionary held in memory, iterated in alphabetical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<Word>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses each string as a [`Word`], case-insensitively.
    pub fn from_words<I, S>(words: I) -> Result<Self, LetterFromStrErr>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| w.as_ref().parse::<Word>())
            .collect()
    }

    /// Returns whether the word was newly inserted.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    fn candidates(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word;

    #[test]
    fn lookup_ignores_case() {
        let dict = WordList::from_words(["hello", "World", "HELLO"]).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains(&word!("HELLO")));
        assert!(dict.contains(&word!("world")));
        assert!(!dict.contains(&word!("HELL")));
    }

    #[test]
    fn candidates_are_sorted_and_restartable() {
        let dict = WordList::from_words(["cat", "act", "bat"]).unwrap();
        let first: Vec<String> = dict.candidates().map(|w| w.to_string()).collect();
        assert_eq!(first, vec!["ACT", "BAT", "CAT"]);
        assert_eq!(dict.candidates().count(), 3);
    }

    #[test]
    fn rejects_non_letters() {
        assert!(WordList::from_words(["ok", "not-ok"]).is_err());
    }
}
