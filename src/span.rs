// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use crate::parser::Pair;

/// A byte-index tuple representing a span of characters in a string
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Span {
  pub start: usize,
  pub end: usize
}

impl Span {
  pub fn new(start: usize, end: usize) -> Span {
    Span { start, end }
  }

  pub(crate) fn from_pair(record: &Pair) -> Span {
    let pest_span = record.as_span();

    Span {
      start: pest_span.start(),
      end: pest_span.end()
    }
  }

  /// Returns the text this span covers in `content`, the input document the
  /// span was produced from.
  ///
  /// Returns an empty string if the span doesn't fit within `content`.
  pub fn as_str<'a>(&self, content: &'a str) -> &'a str {
    content.get(self.start..self.end).unwrap_or("")
  }

  pub fn len(&self) -> usize {
    self.end.saturating_sub(self.start)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
