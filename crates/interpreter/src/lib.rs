use errors::ShuntError;
use parser::parse;

mod eval;

#[cfg(test)]
mod test;

pub use eval::{eval, pow};

/// Tokenizes, converts and evaluates `src` in one go.
pub fn run_on_src<S>(src: S) -> Result<i64, ShuntError>
where
    S: AsRef<str>,
{
    let mut postfix = parse(src)?;
    let result = eval(&mut postfix).map_err(ShuntError::EvaluatingError)?;

    Ok(result)
}
