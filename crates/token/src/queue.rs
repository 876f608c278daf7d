use std::collections::{vec_deque, VecDeque};

use crate::TToken;

/// FIFO sequence of tokens: pending input, or accumulated postfix output.
///
/// `insert` takes the token by value and `remove` hands it back by value, so a
/// token removed from one container can only be reachable from wherever it is
/// moved next.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct TokenQueue {
    tokens: VecDeque<TToken>,
}

impl TokenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the tail.
    pub fn insert(&mut self, token: TToken) {
        self.tokens.push_back(token);
    }

    /// Removes from the head.
    pub fn remove(&mut self) -> Option<TToken> {
        self.tokens.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, TToken> {
        self.tokens.iter()
    }

    /// Every token rendered and followed by a single space.
    pub fn dump(&self) -> String {
        self.tokens
            .iter()
            .map(|t| format!("{} ", t.inner))
            .collect()
    }
}

impl FromIterator<TToken> for TokenQueue {
    fn from_iter<I: IntoIterator<Item = TToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenQueue {
    type Item = TToken;
    type IntoIter = vec_deque::IntoIter<TToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenQueue {
    type Item = &'a TToken;
    type IntoIter = vec_deque::Iter<'a, TToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
