// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::convert::TryFrom;
use std::fmt;

use serde::Serialize;

use crate::dockerfile::Instruction;
use crate::image::{ImageRef, Reference, Registry};
use crate::parser::{Pair, Rule};
use crate::span::Span;
use crate::error::*;

/// A Dockerfile [`FROM` instruction][from].
///
/// The serialized fields have defaults applied: an image without a registry
/// reports `Docker Hub`, and one without a tag or digest reports `latest`. A
/// digest is reported in `tag` as `@<algorithm>:<hash>`. The undefaulted parse
/// is available as `image_parsed`.
///
/// [from]: https://docs.docker.com/engine/reference/builder/#from
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FromInstruction {
  pub image: String,
  pub registry: String,
  pub tag: String,

  /// The build stage name given with `AS`, if any.
  pub local_name: Option<String>,

  /// The value of a `--platform=` flag. Consumed, but not reported.
  #[serde(skip)]
  pub platform: Option<String>,

  #[serde(skip)]
  pub image_parsed: ImageRef,

  #[serde(skip)]
  pub span: Span
}

impl FromInstruction {
  pub(crate) fn from_record(record: Pair) -> Result<FromInstruction> {
    let span = Span::from_pair(&record);
    let mut platform = None;
    let mut registry = None;
    let mut image = None;
    let mut reference = None;
    let mut local_name = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::platform => {
          platform = field.into_inner()
            .find(|p| p.as_rule() == Rule::platform_value)
            .map(|p| p.as_str().to_string());
        },
        Rule::registry => registry = Some(Registry::from_record(field)?),
        Rule::image_name => image = Some(field.as_str().to_string()),
        Rule::tag => reference = Some(Reference::from_tag_record(field)?),
        Rule::digest => reference = Some(Reference::from_digest_record(field)?),
        Rule::stage_name => local_name = Some(field.as_str().to_string()),
        _ => return Err(unexpected_token(field))
      };
    }

    let image = image.ok_or(Error::UnexpectedToken { rule: Rule::image_name })?;
    let image_parsed = ImageRef { registry, image, reference };

    Ok(FromInstruction {
      image: image_parsed.image.clone(),
      registry: image_parsed.registry_or_default(),
      tag: image_parsed.tag_or_default(),
      local_name,
      platform,
      image_parsed,
      span
    })
  }
}

/// Renders the minimal instruction text for this `FROM`, which parses back to
/// an instruction with the same fields.
impl fmt::Display for FromInstruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FROM ")?;

    if let Some(platform) = &self.platform {
      write!(f, "--platform={} ", platform)?;
    }

    write!(f, "{}", self.image_parsed)?;

    if let Some(local_name) = &self.local_name {
      write!(f, " AS {}", local_name)?;
    }

    Ok(())
  }
}

impl<'a> TryFrom<&'a Instruction> for &'a FromInstruction {
  type Error = Error;

  fn try_from(instruction: &'a Instruction) -> std::result::Result<Self, Self::Error> {
    if let Instruction::From(f) = instruction {
      Ok(f)
    } else {
      Err(Error::ConversionError {
        from: format!("{:?}", instruction),
        to: "FromInstruction".into()
      })
    }
  }
}
