use errors::{DivisionError, EvaluatingError, RemainingError, StackError, UnknownError};
use log::{debug, trace};
use token::{
    trivia::{new, Range, Trivia},
    Operator, TToken, Token, TokenQueue, TokenStack, Unary,
};

type Res<T> = Result<T, EvaluatingError>;

/// Drains a postfix queue down to a single value.
pub fn eval(postfix: &mut TokenQueue) -> Res<i64> {
    let mut stack = TokenStack::new();

    while let Some(t) = postfix.remove() {
        match t.inner {
            Token::Number(_) => stack.push(t),
            Token::Operator(op) => {
                // b sits above a: the right operand was pushed last
                let b = pop_operand(&mut stack, t.span)?;
                let a = pop_operand(&mut stack, t.span)?;
                let value = eval_binary(op, &a, &b, t.span)?;
                let span = a.span.join(b.span).join(t.span);

                trace!("{} {op} {} = {value}", a.inner, b.inner);
                stack.push(new(Token::Number(value), span));
            }
            Token::Unary(u) => {
                let a = pop_operand(&mut stack, t.span)?;
                let value = eval_unary(u, a.inner);

                trace!("{u} {} = {value}", a.inner);
                stack.push(new(Token::Number(value), a.span.join(t.span)));
            }
            Token::Parenthesis(_) => return Err(unknown(&t)),
        }
    }

    let result = pop_operand(&mut stack, Range::default())?;
    if let Some(extra) = stack.pop() {
        return Err(EvaluatingError::RemainingOperands(RemainingError {
            start: extra.span.start,
            end: extra.span.end,
            remaining: stack.len() + 2,
        }));
    }

    debug!("result: {}", result.inner);
    Ok(result.inner)
}

fn pop_operand(stack: &mut TokenStack, blame: Range) -> Res<Trivia<i64>> {
    match stack.pop() {
        Some(Trivia {
            inner: Token::Number(n),
            span,
        }) => Ok(new(n, span)),
        Some(other) => Err(unknown(&other)),
        None => Err(EvaluatingError::StackEmpty(StackError {
            start: blame.start,
            end: blame.end,
        })),
    }
}

fn eval_binary(op: Operator, a: &Trivia<i64>, b: &Trivia<i64>, span: Range) -> Res<i64> {
    let divisor = b.span;
    let (a, b) = (a.inner, b.inner);
    let value = match op {
        Operator::Add => a.wrapping_add(b),
        Operator::Sub => a.wrapping_sub(b),
        Operator::Mul => a.wrapping_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(EvaluatingError::DivisionByZero(DivisionError {
                    op_start: span.start,
                    op_end: span.end,
                    divisor_start: divisor.start,
                    divisor_end: divisor.end,
                }));
            }
            a.wrapping_div(b)
        }
        Operator::Pow => pow(a, b),
    };
    Ok(value)
}

fn eval_unary(u: Unary, a: i64) -> i64 {
    match u {
        Unary::Negate => a.wrapping_neg(),
    }
}

/// `a` to the power `b` through `f64`, truncated toward zero and saturated at
/// the `i64` bounds. Magnitudes past 2^53 lose precision.
pub fn pow(a: i64, b: i64) -> i64 {
    (a as f64).powf(b as f64) as i64
}

fn unknown(t: &TToken) -> EvaluatingError {
    EvaluatingError::UnknownOperator(UnknownError {
        start: t.span.start,
        end: t.span.end,
        repr: t.inner.to_string(),
    })
}
