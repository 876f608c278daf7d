use errors::{EvaluatingError, StackError};
use insta::assert_snapshot;
use token::{
    trivia::{new, Range},
    Operator, Parenthesis, TToken, Token, TokenQueue, Unary,
};

use crate::{eval, pow, run_on_src};

fn e(s: &str) -> String {
    match run_on_src(s) {
        Ok(o) => o.to_string(),
        Err(e) => format!("{:?}", e),
    }
}

fn at(token: Token, start: usize) -> TToken {
    new(token, Range { start, end: start + 1 })
}

#[test]
fn test() {
    assert_snapshot!(e("1"), @"1");
    assert_snapshot!(e("3+4*2"), @"11");
    assert_snapshot!(e("(3+4)*2"), @"14");
    assert_snapshot!(e("2^3^2"), @"512");
    assert_snapshot!(e("8/4/2"), @"1");
    assert_snapshot!(e("10-4"), @"6");
    assert_snapshot!(e("0-12"), @"-12");
    assert_snapshot!(e("2*(3+4)^2"), @"98");
    assert_snapshot!(e("12*(3-45)"), @"-504");
}

#[test]
fn test_truncating_division() {
    assert_snapshot!(e("5/2"), @"2");
    assert_snapshot!(e("7/-2"), @"-3");
    assert_snapshot!(e("(0-7)/2"), @"-3");
}

#[test]
fn test_unary() {
    assert_snapshot!(e("-5+3"), @"-8");
    assert_snapshot!(e("(-5)+3"), @"-2");
    assert_snapshot!(e("2*-3+1"), @"-8");
    assert_snapshot!(e("--3"), @"3");
    assert_snapshot!(e("-(2+3)*4"), @"-20");
}

#[test]
fn test_pow() {
    assert_snapshot!(e("2^10"), @"1024");
    assert_snapshot!(e("2^-1"), @"0");
    assert_snapshot!(e("0^0"), @"1");
    assert_snapshot!(e("(0-2)^3"), @"-8");
    assert_snapshot!(e("2^63"), @"9223372036854775807");
    assert_snapshot!(e("3^40"), @"9223372036854775807");
    assert_eq!(pow(-2, 63), i64::MIN);
}

#[test]
fn test_wrapping() {
    assert_snapshot!(e("9223372036854775807+1"), @"-9223372036854775808");
    assert_snapshot!(e("2^62*2"), @"-9223372036854775808");
    assert_snapshot!(e("9223372036854775808"), @"-9223372036854775808");
    assert_snapshot!(e("-9223372036854775808"), @"-9223372036854775808");
}

#[test]
fn test_errors() {
    assert_snapshot!(
        e("1/0"),
        @"EvaluatingError(DivisionByZero(DivisionError { op_start: 1, op_end: 2, divisor_start: 2, divisor_end: 3 }))"
    );
    assert_snapshot!(
        e("1/(3-3)"),
        @"EvaluatingError(DivisionByZero(DivisionError { op_start: 1, op_end: 2, divisor_start: 3, divisor_end: 6 }))"
    );
    assert_snapshot!(
        e("+5"),
        @"EvaluatingError(StackEmpty(StackError { start: 0, end: 1 }))"
    );
    assert_snapshot!(
        e("-"),
        @"EvaluatingError(StackEmpty(StackError { start: 0, end: 1 }))"
    );
    assert_snapshot!(
        e("(1)(2)"),
        @"EvaluatingError(RemainingOperands(RemainingError { start: 1, end: 2, remaining: 2 }))"
    );
    assert_snapshot!(
        e("(1+2"),
        @"ParsingError(UnmatchedOpeningParenthesis(ParenthesisError { start: 0, end: 1 }))"
    );
    assert_snapshot!(
        e("1+2)"),
        @"ParsingError(UnmatchedClosingParenthesis(ParenthesisError { start: 3, end: 4 }))"
    );
    assert_snapshot!(
        e("1 +2"),
        @"ParsingError(UnexpectedCharacter(CharacterError { offset: 1, found: ' ' }))"
    );
}

#[test]
fn test_empty() {
    assert_eq!(
        eval(&mut TokenQueue::new()),
        Err(EvaluatingError::StackEmpty(StackError { start: 0, end: 0 }))
    );
}

#[test]
fn test_hand_built_postfix() {
    let mut postfix: TokenQueue = [
        at(Token::Number(6), 0),
        at(Token::Number(2), 1),
        at(Token::Number(1), 2),
        at(Token::Operator(Operator::Sub), 3),
        at(Token::Operator(Operator::Div), 4),
        at(Token::Unary(Unary::Negate), 5),
    ]
    .into_iter()
    .collect();

    assert_eq!(eval(&mut postfix), Ok(-6));
    assert!(postfix.is_empty());
}

#[test]
fn test_parenthesis_is_not_an_operator() {
    let mut postfix: TokenQueue = [
        at(Token::Number(1), 0),
        at(Token::Parenthesis(Parenthesis::Open), 1),
    ]
    .into_iter()
    .collect();

    assert_snapshot!(
        format!("{:?}", eval(&mut postfix)),
        @r###"Err(UnknownOperator(UnknownError { start: 1, end: 2, repr: "(" }))"###
    );
}
