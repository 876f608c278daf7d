use std::fmt;

use pratt::{Associativity, Precedence};

use crate::trivia::{Trivia, WithTrivia};

/// One lexical unit of an arithmetic expression.
///
/// Tokens are deliberately not `Clone`: a token lives in exactly one queue or
/// stack at a time and is moved, never duplicated, between them.
#[derive(Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Number(i64),
    Operator(Operator),
    Unary(Unary),
    Parenthesis(Parenthesis),
}

impl Token {
    pub fn is_open(&self) -> bool {
        matches!(self, Token::Parenthesis(Parenthesis::Open))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Unary(u) => write!(f, "{u}"),
            Token::Parenthesis(p) => write!(f, "{p}"),
        }
    }
}

impl WithTrivia for Trivia<Token> {
    fn pretty_string(&self, indent: usize) -> String {
        let buffer = " ".repeat(indent);
        format!("{buffer}{} {}..{}", self.inner, self.span.start, self.span.end)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        let op = match c {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            '^' => Operator::Pow,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    // Operators sharing a precedence must share an associativity.
    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Sub => Precedence(0),
            Operator::Mul | Operator::Div => Precedence(1),
            Operator::Pow => Precedence(2),
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn is_left_associative(self) -> bool {
        matches!(self.associativity(), Associativity::Left)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unary {
    Negate,
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unary::Negate => write!(f, "(-)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parenthesis {
    Open,
    Close,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthesis::Open => write!(f, "("),
            Parenthesis::Close => write!(f, ")"),
        }
    }
}
