// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use pest::error::{ErrorVariant, InputLocation, LineColLocation};
use snafu::Snafu;

use crate::parser::*;

/// A Dockerfile parsing error.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  /// The input does not conform to the grammar.
  ///
  /// The wrapped Pest error points at the furthest position the parser
  /// reached and lists the rules that could have matched there.
  #[snafu(display(
    "could not parse Dockerfile: {}", describe_rules(source)
  ))]
  SyntaxError {
    source: pest::error::Error<Rule>
  },

  #[snafu(display(
    "unexpected token {:?}", rule
  ))]
  UnexpectedToken {
    rule: Rule
  },

  #[snafu(display(
    "could not read Dockerfile: {}", source
  ))]
  ReadError {
    source: std::io::Error
  },

  #[snafu(display(
    "could not convert instruction '{:?}' to desired type '{}'", from, to
  ))]
  ConversionError {
    from: String,
    to: String
  }
}

impl Error {
  /// The (1-based) line and column of a syntax error.
  pub fn line_col(&self) -> Option<(usize, usize)> {
    match self {
      Error::SyntaxError { source } => match source.line_col {
        LineColLocation::Pos(pos) => Some(pos),
        LineColLocation::Span(start, _) => Some(start)
      },
      _ => None
    }
  }

  /// The byte offset into the input of a syntax error.
  pub fn offset(&self) -> Option<usize> {
    match self {
      Error::SyntaxError { source } => match source.location {
        InputLocation::Pos(pos) => Some(pos),
        InputLocation::Span((start, _)) => Some(start)
      },
      _ => None
    }
  }

  /// The rules that were attempted at the position of a syntax error.
  pub fn expected(&self) -> Vec<Rule> {
    match self {
      Error::SyntaxError { source } => match &source.variant {
        ErrorVariant::ParsingError { positives, .. } => prune_expected(positives),
        ErrorVariant::CustomError { .. } => Vec::new()
      },
      _ => Vec::new()
    }
  }
}

/// Renders a Pest error using readable rule descriptions in place of raw rule
/// names.
fn describe_rules(source: &pest::error::Error<Rule>) -> pest::error::Error<Rule> {
  let mut source = source.clone();

  if let ErrorVariant::ParsingError { positives, .. } = &mut source.variant {
    *positives = prune_expected(positives);
  }

  source.renamed_rules(|rule| rule.describe().to_string())
}

/// Drops expected rules that only show up as a side effect of backtracking.
///
/// A `:` after an image name may begin either a registry port or a tag. When
/// both fail at the same position the registry alternative has already been
/// abandoned, so only the tag is reported.
fn prune_expected(positives: &[Rule]) -> Vec<Rule> {
  if positives.contains(&Rule::tag_name) {
    positives.iter().copied().filter(|rule| *rule != Rule::port).collect()
  } else {
    positives.to_vec()
  }
}

/// A Dockerfile parsing Result.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper to create an unexpected token error.
pub(crate) fn unexpected_token(record: Pair) -> Error {
  Error::UnexpectedToken {
    rule: record.as_rule()
  }
}
