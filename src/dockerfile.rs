// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::convert::TryFrom;
use std::io::{Read, BufReader};
use std::str::FromStr;

use log::{debug, trace};
use pest::Parser;
use serde::Serialize;
use snafu::ResultExt;

use crate::error::*;
use crate::parser::*;
use crate::instructions::*;
use crate::util::parse_comment;

/// A single supported Dockerfile instruction.
///
/// Individual instructions structures may be unpacked with pattern matching or
/// via the `TryFrom` impls on each instruction type.
///
/// # Example
///
/// ```
/// use std::convert::TryInto;
/// use dockerfile_summary::*;
///
/// let dockerfile = Dockerfile::parse("FROM alpine:3.11").unwrap();
/// let from: &FromInstruction = dockerfile.instructions
///   .get(0).unwrap()
///   .try_into().unwrap();
///
/// assert_eq!(from.tag, "3.11");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Instruction {
  From(FromInstruction),
  User(UserInstruction)
}

/// Maps an instruction struct to its enum variant, implementing From<T> on
/// Instruction for it.
macro_rules! impl_from_instruction {
  ($struct:ident, $enum:expr) => {
    impl From<$struct> for Instruction {
      fn from(ins: $struct) -> Self {
        $enum(ins)
      }
    }
  };
}

impl_from_instruction!(FromInstruction, Instruction::From);
impl_from_instruction!(UserInstruction, Instruction::User);

/// A single non-blank line of a Dockerfile.
///
/// Blank lines are consumed by the grammar and never produce a `Line`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Line {
  /// The words of a comment joined by single spaces; may be empty.
  Comment(String),

  Instruction(Instruction)
}

impl TryFrom<Pair<'_>> for Line {
  type Error = Error;

  fn try_from(record: Pair) -> std::result::Result<Self, Self::Error> {
    let line = match record.as_rule() {
      Rule::comment => Line::Comment(parse_comment(record)?),
      Rule::from_command => Line::Instruction(
        FromInstruction::from_record(record)?.into()
      ),
      Rule::user_command => Line::Instruction(
        UserInstruction::from_record(record)?.into()
      ),
      _ => return Err(unexpected_token(record))
    };

    Ok(line)
  }
}

/// Instructions grouped by kind, each in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Commands {
  pub from_commands: Vec<FromInstruction>,
  pub user_commands: Vec<UserInstruction>
}

/// A parsed Dockerfile.
///
/// Non-empty comments are collected in `comments`, and instructions are
/// grouped by kind in `commands`. Serializing a `Dockerfile` produces only
/// these two fields.
///
/// # Example
/// ```
/// use dockerfile_summary::Dockerfile;
///
/// let s = r#"
///   ## build stage
///   FROM alpine:3.11 AS build
///   USER nobody
/// "#;
///
/// let dockerfile = Dockerfile::parse(&s).unwrap();
/// assert_eq!(dockerfile.comments, vec!["build stage".to_string()]);
/// assert_eq!(dockerfile.commands.from_commands[0].local_name, Some("build".into()));
/// assert_eq!(dockerfile.commands.user_commands[0].user, "nobody");
///
/// assert_eq!(dockerfile, s.parse::<Dockerfile>().unwrap());
/// assert_eq!(dockerfile, Dockerfile::from_reader(s.as_bytes()).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dockerfile {
  /// The raw content of the Dockerfile
  #[serde(skip)]
  pub content: String,

  /// An ordered list of all parsed instructions
  #[serde(skip)]
  pub instructions: Vec<Instruction>,

  pub comments: Vec<String>,

  pub commands: Commands
}

fn parse_dockerfile(input: &str) -> Result<Dockerfile> {
  let dockerfile = DockerfileParser::parse(Rule::document, input)
    .context(SyntaxError)?
    .next()
    .ok_or(Error::UnexpectedToken { rule: Rule::document })?;

  let mut instructions = Vec::new();
  let mut comments = Vec::new();
  let mut commands = Commands::default();

  for record in dockerfile.into_inner() {
    if let Rule::EOI = record.as_rule() {
      continue;
    }

    let line = Line::try_from(record)?;
    trace!("reduced line: {:?}", line);

    match line {
      Line::Comment(text) => {
        // a bare `#` has no text to report
        if !text.is_empty() {
          comments.push(text);
        }
      },
      Line::Instruction(instruction) => {
        match &instruction {
          Instruction::From(from) => commands.from_commands.push(from.clone()),
          Instruction::User(user) => commands.user_commands.push(user.clone())
        };

        instructions.push(instruction);
      }
    };
  }

  debug!(
    "parsed Dockerfile: {} comments, {} FROM, {} USER",
    comments.len(),
    commands.from_commands.len(),
    commands.user_commands.len()
  );

  Ok(Dockerfile {
    content: input.into(),
    instructions, comments, commands
  })
}

impl Dockerfile {
  /// Parses a Dockerfile from a string.
  ///
  /// Parsing is all-or-nothing: any line that isn't a comment, a supported
  /// instruction or blank fails the whole document with
  /// `Error::SyntaxError`.
  pub fn parse(input: &str) -> Result<Dockerfile> {
    parse_dockerfile(input)
  }

  /// Parses a Dockerfile from a reader.
  pub fn from_reader<R>(reader: R) -> Result<Dockerfile>
  where
    R: Read
  {
    let mut buf = String::new();
    let mut buf_reader = BufReader::new(reader);
    buf_reader.read_to_string(&mut buf).context(ReadError)?;

    Dockerfile::parse(&buf)
  }
}

impl FromStr for Dockerfile {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Dockerfile::parse(s)
  }
}
