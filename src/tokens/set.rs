//! `TokenSet`: the class payload attached to a base, slot or variant value.

use std::fmt;

use crate::tokens::tokenizer::tokenize;

/// A class payload, either a single space-separated string or an explicit list.
///
/// List entries may themselves contain spaces; [`TokenSet::tokens`] splits
/// every entry, so `["px-2 py-1", "rounded"]` and `"px-2 py-1 rounded"`
/// produce the same tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSet {
    /// A space-separated class string, e.g. `"px-2 py-1"`.
    Text(String),
    /// An explicit sequence of class strings.
    List(Vec<String>),
}

impl TokenSet {
    /// An empty token set.
    pub fn empty() -> Self {
        TokenSet::List(Vec::new())
    }

    /// All class tokens in declaration order, whitespace removed.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            TokenSet::Text(text) => tokenize(text),
            TokenSet::List(items) => items.iter().flat_map(|item| tokenize(item)).collect(),
        }
    }

    /// Tokens with every class prefixed by `"<condition>:"`.
    pub fn prefixed(&self, condition: &str) -> Vec<String> {
        self.tokens()
            .into_iter()
            .map(|token| format!("{condition}:{token}"))
            .collect()
    }

    /// Returns `true` if this set yields no tokens.
    pub fn is_empty(&self) -> bool {
        match self {
            TokenSet::Text(text) => text.trim().is_empty(),
            TokenSet::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    /// `self` followed by `other`, as a list. `self` comes first so that
    /// `other` wins last-wins conflicts in the merge function.
    pub fn concat(&self, other: &TokenSet) -> TokenSet {
        let mut tokens = self.tokens();
        tokens.extend(other.tokens());
        TokenSet::List(tokens)
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        TokenSet::empty()
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

impl From<&str> for TokenSet {
    fn from(text: &str) -> Self {
        TokenSet::Text(text.to_string())
    }
}

impl From<String> for TokenSet {
    fn from(text: String) -> Self {
        TokenSet::Text(text)
    }
}

impl From<&String> for TokenSet {
    fn from(text: &String) -> Self {
        TokenSet::Text(text.clone())
    }
}

impl From<Vec<String>> for TokenSet {
    fn from(items: Vec<String>) -> Self {
        TokenSet::List(items)
    }
}

impl From<Vec<&str>> for TokenSet {
    fn from(items: Vec<&str>) -> Self {
        TokenSet::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TokenSet {
    fn from(items: [&str; N]) -> Self {
        TokenSet::List(items.into_iter().map(str::to_string).collect())
    }
}
