// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::convert::TryFrom;
use std::fmt;

use serde::Serialize;

use crate::dockerfile::Instruction;
use crate::parser::{Pair, Rule};
use crate::span::Span;
use crate::error::*;

/// Which form of `USER` argument matched.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UserKind {
  /// unix user and group names, e.g. `USER app:staff`
  Name,

  /// numeric uid and gid, e.g. `USER 1000:1000`
  Id
}

/// A Dockerfile [`USER` instruction][user].
///
/// Both argument forms report the same fields; `user` and `group` hold either
/// names or numeric ids depending on `kind`.
///
/// [user]: https://docs.docker.com/engine/reference/builder/#user
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct UserInstruction {
  pub user: String,
  pub group: Option<String>,

  #[serde(skip)]
  pub kind: UserKind,

  #[serde(skip)]
  pub span: Span
}

impl UserInstruction {
  pub(crate) fn from_record(record: Pair) -> Result<UserInstruction> {
    let span = Span::from_pair(&record);
    let mut pair = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::user_name_pair => pair = Some((UserKind::Name, field)),
        Rule::user_id_pair => pair = Some((UserKind::Id, field)),
        _ => return Err(unexpected_token(field))
      }
    }

    let (kind, pair) = pair.ok_or(Error::UnexpectedToken { rule: Rule::user_command })?;

    let mut parts = Vec::new();
    for part in pair.into_inner() {
      match part.as_rule() {
        Rule::unix_user | Rule::unix_uid => parts.push(part.as_str().to_string()),
        _ => return Err(unexpected_token(part))
      }
    }

    let mut parts = parts.into_iter();
    let user = parts.next().ok_or(Error::UnexpectedToken { rule: Rule::user_command })?;
    let group = parts.next();

    Ok(UserInstruction { user, group, kind, span })
  }
}

impl fmt::Display for UserInstruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "USER {}", self.user)?;

    if let Some(group) = &self.group {
      write!(f, ":{}", group)?;
    }

    Ok(())
  }
}

impl<'a> TryFrom<&'a Instruction> for &'a UserInstruction {
  type Error = Error;

  fn try_from(instruction: &'a Instruction) -> std::result::Result<Self, Self::Error> {
    if let Instruction::User(u) = instruction {
      Ok(u)
    } else {
      Err(Error::ConversionError {
        from: format!("{:?}", instruction),
        to: "UserInstruction".into()
      })
    }
  }
}
