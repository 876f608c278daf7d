use errors::ParsingError;
use pest_derive::Parser;
use token::TokenQueue;

mod lex;
mod shunt;

pub use lex::tokenize;
pub use shunt::shunting_yard;

#[derive(Parser)]
#[grammar = "shunt.pest"]
pub struct ShuntParser;

/// Tokenizes `src` and converts it straight to postfix.
pub fn parse<S>(src: S) -> Result<TokenQueue, ParsingError>
where
    S: AsRef<str>,
{
    let mut input = tokenize(src)?;
    let mut output = TokenQueue::new();
    shunting_yard(&mut input, &mut output)?;

    Ok(output)
}
