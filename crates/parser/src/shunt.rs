use errors::{ParenthesisError, ParsingError};
use log::{debug, trace};
use token::{trivia::Range, Operator, Parenthesis, Token, TokenQueue, TokenStack};

/// Moves every token of the infix `input` into `output` in postfix order.
///
/// Unary signs are pushed like parentheses and only leave the stack when a
/// `)` or the end of input drains it, so a sign covers everything stacked
/// above it at that point: `-5+3` becomes `5 3 + (-)`.
pub fn shunting_yard(input: &mut TokenQueue, output: &mut TokenQueue) -> Result<(), ParsingError> {
    let mut stack = TokenStack::new();

    while let Some(t) = input.remove() {
        match t.inner {
            Token::Number(_) => output.insert(t),
            Token::Operator(op) => {
                while stack.peek().is_some_and(|top| yields_to(&top.inner, op)) {
                    if let Some(top) = stack.pop() {
                        trace!("`{op}` pops `{}`", top.inner);
                        output.insert(top);
                    }
                }
                stack.push(t);
            }
            Token::Parenthesis(Parenthesis::Open) | Token::Unary(_) => stack.push(t),
            Token::Parenthesis(Parenthesis::Close) => loop {
                match stack.pop() {
                    Some(top) if top.inner.is_open() => break,
                    Some(top) => output.insert(top),
                    None => {
                        return Err(ParsingError::UnmatchedClosingParenthesis(
                            paren_error(t.span),
                        ))
                    }
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.inner.is_open() {
            return Err(ParsingError::UnmatchedOpeningParenthesis(paren_error(
                top.span,
            )));
        }
        output.insert(top);
    }

    debug!("postfix: {}", output.dump());
    Ok(())
}

// Only a binary operator already on the stack can be popped by `op`.
fn yields_to(top: &Token, op: Operator) -> bool {
    match top {
        Token::Operator(top) => {
            let (top_prec, op_prec) = (top.precedence().0, op.precedence().0);
            top_prec > op_prec || (top_prec == op_prec && top.is_left_associative())
        }
        _ => false,
    }
}

fn paren_error(span: Range) -> ParenthesisError {
    ParenthesisError {
        start: span.start,
        end: span.end,
    }
}
