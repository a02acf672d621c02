use std::collections::HashMap;
use std::fmt;

///Each word gets assigned an ID integer (its position in the vocabulary), carries no further meaning
pub type VocabId = u64;

///The anagram value: all characters of a word, lowercased and sorted by code point.
///Two words are anagrams of each other if and only if their anagram values are equal.
#[derive(Clone,Debug,Default,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct AnaValue(pub(crate) String);

impl AnaValue {
    /// The value of an empty anagram
    pub fn empty() -> AnaValue {
        AnaValue(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Computes the number of characters in this anagram
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AnaValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///A node in the anagram index, holds all instances that share an anagram value
#[derive(Clone,Debug,Default)]
pub struct AnaIndexNode {
    ///Vocabulary ids in the order they were encountered
    pub instances: Vec<VocabId>,
}

///The main index, mapping anagram values to instances
pub type AnaIndex = HashMap<AnaValue,AnaIndexNode>;
