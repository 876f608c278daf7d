use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use errors::ShuntError;
use interpreter::eval;
use log::{error, info, LevelFilter};
use parser::{shunting_yard, tokenize};
use thiserror::Error;
use token::TokenQueue;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Converts an infix arithmetic expression to postfix notation and, as
/// `shunteval`, evaluates it.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Expression such as `(3+4)*2`. Every character counts: no spaces.
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Log verbosity on stderr; `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Convert,
    Evaluate,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Shunt(#[from] ShuntError),
}

pub fn init_logger(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .try_init()
        .ok();
}

/// Writes the `input:`/`output:` dumps, and in evaluate mode the `result:`
/// line, to `out`. Lines written before a failure stay written.
pub fn run<W>(mode: Mode, expression: &str, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let mut input = tokenize(expression).map_err(ShuntError::from)?;
    writeln!(out, "input:  {}", input.dump())?;

    let mut output = TokenQueue::new();
    shunting_yard(&mut input, &mut output).map_err(ShuntError::from)?;
    writeln!(out, "output: {}", output.dump())?;

    if mode == Mode::Evaluate {
        let result = eval(&mut output).map_err(ShuntError::from)?;
        writeln!(out, "result: {result}")?;
    }

    Ok(())
}

pub fn main(mode: Mode) -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);
    info!("{mode:?} `{}`", args.expression);

    let stdout = io::stdout();
    match run(mode, &args.expression, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Shunt(e)) => {
            eprint!("{}", e.to_report(&args.expression));
            ExitCode::FAILURE
        }
        Err(CliError::Io(e)) => {
            error!("writing to stdout failed: {e}");
            ExitCode::FAILURE
        }
    }
}
