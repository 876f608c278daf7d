use errors::{CharacterError, ParsingError};
use log::{debug, trace};
use pest::{error::InputLocation, iterators::Pair, Parser};
use token::{
    trivia::{new, Range},
    Operator, Parenthesis, Token, TokenQueue, Unary,
};

use crate::{Rule, ShuntParser};

/// Splits `src` into an infix token queue.
///
/// A `-` read while an operand is expected (at the start, after an operator,
/// or after `(`) becomes a unary negation instead of a subtraction.
pub fn tokenize<S>(src: S) -> Result<TokenQueue, ParsingError>
where
    S: AsRef<str>,
{
    let src = src.as_ref();
    let pairs = ShuntParser::parse(Rule::expression, src).map_err(|e| {
        let offset = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        unexpected(src, offset)
    })?;

    let mut queue = TokenQueue::new();
    let mut expecting_operand = true;

    for pair in pairs.flat_map(Pair::into_inner) {
        let span = Range {
            start: pair.as_span().start(),
            end: pair.as_span().end(),
        };

        let token = match pair.as_rule() {
            Rule::number => {
                expecting_operand = false;
                Token::Number(accumulate(pair.as_str()))
            }
            Rule::operator => {
                let Some(op) = pair.as_str().chars().next().and_then(Operator::from_char) else {
                    unreachable!("grammar only admits operator symbols")
                };
                if expecting_operand && op == Operator::Sub {
                    Token::Unary(Unary::Negate)
                } else {
                    expecting_operand = true;
                    Token::Operator(op)
                }
            }
            Rule::open => {
                expecting_operand = true;
                Token::Parenthesis(Parenthesis::Open)
            }
            Rule::close => {
                expecting_operand = false;
                Token::Parenthesis(Parenthesis::Close)
            }
            Rule::EOI => continue,
            _ => unreachable!(),
        };

        trace!("read `{token}` at {}..{}", span.start, span.end);
        queue.insert(new(token, span));
    }

    debug!("tokenized {} tokens: {}", queue.len(), queue.dump());
    Ok(queue)
}

// Decimal accumulation in 64 bits, wrapping on overflow.
fn accumulate(digits: &str) -> i64 {
    digits.bytes().fold(0i64, |n, d| {
        n.wrapping_mul(10).wrapping_add(i64::from(d - b'0'))
    })
}

fn unexpected(src: &str, offset: usize) -> ParsingError {
    let found = src
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ParsingError::UnexpectedCharacter(CharacterError { offset, found })
}
