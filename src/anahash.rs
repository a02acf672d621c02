use crate::types::*;

///Trait for objects that can be anahashed (string-like)
pub trait Anahashable {
    fn anahash(&self) -> AnaValue;
}

impl Anahashable for str {
    ///Compute the anagram value for a given string: all characters are lowercased
    ///and then sorted by code point. Duplicate characters are retained.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anagramfinder::*;
    /// assert_eq!("Stop".anahash(), "post".anahash());
    /// assert_eq!("Stop".anahash().as_str(), "opst");
    /// assert!("".anahash().is_empty());
    /// ```
    fn anahash(&self) -> AnaValue {
        let mut chars: Vec<char> = self.to_lowercase().chars().collect();
        chars.sort_unstable();
        AnaValue(chars.into_iter().collect())
    }
}

impl Anahashable for String {
    fn anahash(&self) -> AnaValue {
        self.as_str().anahash()
    }
}
