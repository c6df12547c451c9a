// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use crate::error::*;
use crate::parser::*;

/// Given a comment node, returns its words joined by single spaces.
///
/// Runs of whitespace between words collapse, and a bare `#` yields an empty
/// string.
pub(crate) fn parse_comment(record: Pair) -> Result<String> {
  let mut words = Vec::new();

  for field in record.into_inner() {
    match field.as_rule() {
      Rule::word => words.push(field.as_str()),
      _ => return Err(unexpected_token(field))
    }
  }

  Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_util::*;

  #[test]
  fn comment_words() -> Result<()> {
    assert_eq!(
      parse_direct("# build   stage\t2 ", Rule::comment, parse_comment)?,
      "build stage 2"
    );

    assert_eq!(
      parse_direct("#no-space", Rule::comment, parse_comment)?,
      "no-space"
    );

    Ok(())
  }

  #[test]
  fn comment_empty() -> Result<()> {
    assert_eq!(parse_direct("#", Rule::comment, parse_comment)?, "");
    assert_eq!(parse_direct("#   ", Rule::comment, parse_comment)?, "");

    Ok(())
  }

  #[test]
  fn comment_nested_hash() -> Result<()> {
    assert_eq!(
      parse_direct("## FROM alpine", Rule::comment, parse_comment)?,
      "# FROM alpine"
    );

    Ok(())
  }
}
