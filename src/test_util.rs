// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use pest::Parser;
use snafu::ResultExt;

use crate::error::*;
use crate::parser::{DockerfileParser, Pair, Rule};

/// Parses a string using a particular syntax rule and hands the resulting
/// node to `func`.
///
/// Individual rules have no `~ EOI` requirement, so trailing input is ignored;
/// use `Dockerfile::parse` to check that a whole document is accepted.
pub fn parse_direct<T, F>(input: &str, rule: Rule, func: F) -> Result<T>
where
  F: Fn(Pair) -> Result<T>
{
  let pair = DockerfileParser::parse(rule, input)
    .context(SyntaxError)?
    .next()
    .ok_or(Error::UnexpectedToken { rule })?;

  func(pair)
}
