use crate::TToken;

/// LIFO working stack: operators during conversion, operands during
/// evaluation.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct TokenStack {
    tokens: Vec<TToken>,
}

impl TokenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: TToken) {
        self.tokens.push(token);
    }

    pub fn pop(&mut self) -> Option<TToken> {
        self.tokens.pop()
    }

    pub fn peek(&self) -> Option<&TToken> {
        self.tokens.last()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod test {
    use super::TokenStack;
    use crate::{
        token::{Parenthesis, Token},
        trivia::{new, Range},
    };

    #[test]
    fn test_lifo_order() {
        let mut s = TokenStack::new();
        assert!(s.is_empty());
        assert!(s.peek().is_none());
        assert_eq!(s.pop(), None);

        s.push(new(Token::Number(1), Range { start: 0, end: 1 }));
        s.push(new(
            Token::Parenthesis(Parenthesis::Open),
            Range { start: 1, end: 2 },
        ));
        assert_eq!(s.len(), 2);
        assert!(s.peek().is_some_and(|t| t.inner.is_open()));

        assert_eq!(
            s.pop().map(|t| t.inner),
            Some(Token::Parenthesis(Parenthesis::Open))
        );
        assert_eq!(s.pop().map(|t| t.inner), Some(Token::Number(1)));
        assert!(s.is_empty());
    }
}
