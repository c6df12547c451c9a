// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use pest;

/// The internal Pest parser.
///
/// The generated parser holds no state, so a single grammar is shared by every
/// call to `Dockerfile::parse`, including concurrent ones.
#[derive(Parser)]
#[grammar = "dockerfile.pest"]
pub(crate) struct DockerfileParser;

/// A Pest Pair for Dockerfile rules.
pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;

impl Rule {
  /// Returns a human-readable description of a rule, used when rendering
  /// syntax errors.
  pub fn describe(&self) -> &'static str {
    match self {
      Rule::document => "document",
      Rule::comment => "comment",
      Rule::word => "comment text",
      Rule::from_command => "FROM instruction",
      Rule::platform => "--platform flag",
      Rule::platform_value => "platform",
      Rule::registry => "registry",
      Rule::host | Rule::hostname => "registry host",
      Rule::protocol => "registry protocol",
      Rule::port => "registry port",
      Rule::image_name => "image name",
      Rule::tag | Rule::tag_name => "image tag",
      Rule::digest => "image digest",
      Rule::algorithm => "digest algorithm",
      Rule::hash => "digest hash (at least 32 characters)",
      Rule::stage_name => "stage name",
      Rule::user_command => "USER instruction",
      Rule::user_name_pair | Rule::unix_user => "user name",
      Rule::user_id_pair | Rule::unix_uid => "user id",
      Rule::EOI => "end of input",
      _ => "whitespace"
    }
  }
}
