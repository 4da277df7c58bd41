//! CSS class lists and moving classes between elements.

use std::fmt;

/// An ordered set of class tokens, like an element's `classList`.
///
/// ```rust
/// use rvr_utils::ClassList;
///
/// let mut classes = ClassList::parse("button  primary button");
/// assert_eq!(classes.to_string(), "button primary");
/// assert!(classes.toggle("active"));
/// assert_eq!(classes.to_string(), "button primary active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-separated `class` attribute value, dropping duplicates.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for token in value.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Adds `token` unless it is already present.
    ///
    /// Returns `false` without changing anything when the token is empty,
    /// contains whitespace, or is already in the list.
    pub fn add(&mut self, token: &str) -> bool {
        if !is_valid_token(token) || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Removes `token`, returning whether it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Adds `token` if absent, removes it if present. Returns whether it is
    /// present afterwards.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.remove(token) {
            false
        } else {
            self.add(token)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Moves every class from `from` to `to`.
///
/// Classes already on `to` keep their position; new ones are appended in
/// source order. `from` is empty afterwards.
pub fn transfer_classes(from: &mut ClassList, to: &mut ClassList) {
    copy_classes(from, to);
    from.clear();
}

/// Copies every class from `from` to `to`, leaving `from` untouched.
pub fn copy_classes(from: &ClassList, to: &mut ClassList) {
    for token in from.iter() {
        to.add(token);
    }
}
