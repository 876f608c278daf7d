pub mod queue;
pub mod stack;
pub mod token;
pub mod trivia;

pub use queue::TokenQueue;
pub use stack::TokenStack;
pub use token::{Operator, Parenthesis, Token, Unary};

/// A token together with the source range it was read from.
pub type TToken = trivia::Trivia<Token>;
