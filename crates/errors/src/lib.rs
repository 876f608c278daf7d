use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportBuilder, ReportKind, Source};
use thiserror::Error;

const REPORT_ERR: ReportKind<'static> = ReportKind::Custom("error", Color::Unset);

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ShuntError {
    #[error(transparent)]
    ParsingError(#[from] ParsingError),

    #[error(transparent)]
    EvaluatingError(#[from] EvaluatingError),
}

impl ShuntError {
    /// Renders the error as a diagnostic pointing into `source`. Falls back to
    /// the one-line message if the report cannot be written.
    pub fn to_report(&self, source: &str) -> String {
        let report = match self {
            Self::ParsingError(e) => e.to_report(),
            Self::EvaluatingError(e) => e.to_report(),
        };

        let mut buf = Vec::new();
        if report.write(Source::from(source), &mut buf).is_err() {
            return self.to_string();
        }

        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn build(offset: usize, message: String) -> ReportBuilder<'static, Range<usize>> {
    Report::build(REPORT_ERR, (), offset)
        .with_message(message)
        .with_config(Config::default().with_color(false))
}

fn label(start: usize, end: usize, message: String) -> Option<Label> {
    (start < end).then(|| Label::new(start..end).with_message(message))
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParsingError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(CharacterError),

    #[error("Unmatched closing parenthesis.")]
    UnmatchedClosingParenthesis(ParenthesisError),

    #[error("Unmatched opening parenthesis.")]
    UnmatchedOpeningParenthesis(ParenthesisError),
}

impl ParsingError {
    pub fn to_report(&self) -> Report<'static> {
        let message = self.to_string();
        match self {
            Self::UnexpectedCharacter(e) => e.to_report(message),
            Self::UnmatchedClosingParenthesis(e) => {
                e.to_report(message, "「no `(` is open here」")
            }
            Self::UnmatchedOpeningParenthesis(e) => {
                e.to_report(message, "「this `(` is never closed」")
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharacterError {
    pub offset: usize,
    pub found: char,
}

impl CharacterError {
    fn to_report(&self, message: String) -> Report<'static> {
        // Everything before the first unexpected character is ASCII, so the
        // byte offset is also the char offset ariadne expects.
        let end = self.offset + 1;
        let mut report = build(self.offset, message);
        let note = format!(
            "expected a digit, an operator or a parenthesis but found {:?}",
            self.found
        );
        if let Some(l) = label(self.offset, end, note) {
            report = report.with_label(l);
        }

        report.finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParenthesisError {
    pub start: usize,
    pub end: usize,
}

impl ParenthesisError {
    fn to_report(&self, message: String, note: &str) -> Report<'static> {
        let mut report = build(self.start, message);
        if let Some(l) = label(self.start, self.end, note.into()) {
            report = report.with_label(l);
        }

        report.finish()
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EvaluatingError {
    #[error("Stack empty.")]
    StackEmpty(StackError),

    #[error("Remaining operands.")]
    RemainingOperands(RemainingError),

    #[error("Division by zero.")]
    DivisionByZero(DivisionError),

    #[error("Unknown operator.")]
    UnknownOperator(UnknownError),
}

impl EvaluatingError {
    pub fn to_report(&self) -> Report<'static> {
        let message = self.to_string();
        match self {
            Self::StackEmpty(e) => e.to_report(message),
            Self::RemainingOperands(e) => e.to_report(message),
            Self::DivisionByZero(e) => e.to_report(message),
            Self::UnknownOperator(e) => e.to_report(message),
        }
    }
}

/// An operator needed more operands than the stack held. The span is the
/// operator's, or empty when there was no operator to blame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackError {
    pub start: usize,
    pub end: usize,
}

impl StackError {
    fn to_report(&self, message: String) -> Report<'static> {
        let mut report = build(self.start, message);
        if let Some(l) = label(self.start, self.end, "「missing an operand」".into()) {
            report = report.with_label(l);
        }

        report.finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemainingError {
    pub start: usize,
    pub end: usize,
    pub remaining: usize,
}

impl RemainingError {
    fn to_report(&self, message: String) -> Report<'static> {
        let mut report = build(self.start, message);
        if let Some(l) = label(
            self.start,
            self.end,
            format!("「{} values left over; this one has no operator」", self.remaining),
        ) {
            report = report.with_label(l);
        }

        report.finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DivisionError {
    pub op_start: usize,
    pub op_end: usize,
    pub divisor_start: usize,
    pub divisor_end: usize,
}

impl DivisionError {
    fn to_report(&self, message: String) -> Report<'static> {
        let mut report = build(self.op_start, message);
        if let Some(l) = label(self.op_start, self.op_end, "「cannot divide by zero」".into()) {
            report = report.with_label(l);
        }
        if let Some(l) = label(
            self.divisor_start,
            self.divisor_end,
            "this evaluates to 0".into(),
        ) {
            report = report.with_label(l);
        }

        report.finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownError {
    pub start: usize,
    pub end: usize,
    pub repr: String,
}

impl UnknownError {
    fn to_report(&self, message: String) -> Report<'static> {
        let mut report = build(self.start, message);
        if let Some(l) = label(
            self.start,
            self.end,
            format!("「`{}` cannot be applied to operands」", self.repr),
        ) {
            report = report.with_label(l);
        }

        report.finish()
    }
}
