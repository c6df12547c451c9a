// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::fmt;

use crate::error::*;
use crate::parser::{Pair, Rule};

/// The registry reported for images that don't name one.
pub const DEFAULT_REGISTRY: &str = "Docker Hub";

/// The tag reported for images that have neither a tag nor a digest.
pub const DEFAULT_TAG: &str = "latest";

/// An image registry, e.g. `https://myregistry.io:5000`
///
/// The `Display` impl renders the registry the same way it is reported in a
/// `FromInstruction`:
/// ```
/// use dockerfile_summary::Registry;
///
/// let registry = Registry {
///   protocol: Some("https://".into()),
///   host: "myregistry.io".into(),
///   port: Some("5000".into())
/// };
/// assert_eq!(registry.to_string(), "https://myregistry.io:5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
  /// the protocol prefix, verbatim (`http://` or `https://`), if any
  pub protocol: Option<String>,

  pub host: String,

  pub port: Option<String>
}

impl Registry {
  pub(crate) fn from_record(record: Pair) -> Result<Registry> {
    let mut protocol = None;
    let mut host = None;
    let mut port = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::host => {
          for part in field.into_inner() {
            match part.as_rule() {
              Rule::protocol => protocol = Some(part.as_str().to_string()),
              Rule::hostname => host = Some(part.as_str().to_string()),
              _ => return Err(unexpected_token(part))
            }
          }
        },
        Rule::port => port = Some(field.as_str().to_string()),
        _ => return Err(unexpected_token(field))
      }
    }

    let host = host.ok_or(Error::UnexpectedToken { rule: Rule::host })?;

    Ok(Registry { protocol, host, port })
  }
}

impl fmt::Display for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(protocol) = &self.protocol {
      write!(f, "{}", protocol)?;
    }

    write!(f, "{}", self.host)?;

    if let Some(port) = &self.port {
      write!(f, ":{}", port)?;
    }

    Ok(())
  }
}

/// A tag or a content digest pinning an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
  /// A mutable tag, e.g. `3.11`
  Tag(String),

  /// A content digest, e.g. `sha256:e1c4...`
  Digest {
    algorithm: String,
    hash: String
  }
}

impl Reference {
  pub(crate) fn from_tag_record(record: Pair) -> Result<Reference> {
    let mut tag = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::tag_name => tag = Some(field.as_str().to_string()),
        _ => return Err(unexpected_token(field))
      }
    }

    tag
      .map(Reference::Tag)
      .ok_or(Error::UnexpectedToken { rule: Rule::tag })
  }

  pub(crate) fn from_digest_record(record: Pair) -> Result<Reference> {
    let mut algorithm = None;
    let mut hash = None;

    for field in record.into_inner() {
      match field.as_rule() {
        Rule::algorithm => algorithm = Some(field.as_str().to_string()),
        Rule::hash => hash = Some(field.as_str().to_string()),
        _ => return Err(unexpected_token(field))
      }
    }

    match (algorithm, hash) {
      (Some(algorithm), Some(hash)) => Ok(Reference::Digest { algorithm, hash }),
      _ => Err(Error::UnexpectedToken { rule: Rule::digest })
    }
  }
}

/// Renders the reference as reported in `FromInstruction::tag`: tags are bare,
/// digests keep their `@` prefix.
impl fmt::Display for Reference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Reference::Tag(tag) => write!(f, "{}", tag),
      Reference::Digest { algorithm, hash } => write!(f, "@{}:{}", algorithm, hash)
    }
  }
}

/// A parsed docker image reference
///
/// Unlike the fields of `FromInstruction`, no defaults are filled in here: a
/// missing registry or tag is `None`.
///
/// The `Display` impl may be used to convert a parsed image back to a plain
/// string:
/// ```
/// use dockerfile_summary::{ImageRef, Reference};
///
/// let image = ImageRef {
///   registry: None,
///   image: "alpine".into(),
///   reference: Some(Reference::Tag("3.11".into()))
/// };
/// assert_eq!(format!("{}", image), "alpine:3.11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
  /// an optional registry, generally Docker Hub if unset
  pub registry: Option<Registry>,

  /// the image name
  pub image: String,

  /// an optional tag or digest, generally inferred to mean `:latest` if unset
  pub reference: Option<Reference>
}

impl ImageRef {
  /// The registry as reported in a summary, falling back to Docker Hub.
  pub fn registry_or_default(&self) -> String {
    self.registry
      .as_ref()
      .map(|r| r.to_string())
      .unwrap_or_else(|| DEFAULT_REGISTRY.to_string())
  }

  /// The tag (or `@`-prefixed digest) as reported in a summary, falling back
  /// to `latest`.
  pub fn tag_or_default(&self) -> String {
    self.reference
      .as_ref()
      .map(|r| r.to_string())
      .unwrap_or_else(|| DEFAULT_TAG.to_string())
  }
}

impl fmt::Display for ImageRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(registry) = &self.registry {
      write!(f, "{}/", registry)?;
    }

    write!(f, "{}", self.image)?;

    match &self.reference {
      Some(Reference::Tag(tag)) => write!(f, ":{}", tag),
      Some(digest) => write!(f, "{}", digest),
      None => Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_util::*;

  fn image_ref(input: &str) -> Result<ImageRef> {
    parse_direct(
      &format!("FROM {}", input),
      Rule::from_command,
      |p| crate::FromInstruction::from_record(p).map(|f| f.image_parsed)
    )
  }

  #[test]
  fn test_image_ref_dockerhub() -> Result<()> {
    assert_eq!(
      image_ref("alpine:3.10")?,
      ImageRef {
        registry: None,
        image: "alpine".into(),
        reference: Some(Reference::Tag("3.10".into()))
      }
    );

    assert_eq!(
      image_ref("muslrust")?,
      ImageRef {
        registry: None,
        image: "muslrust".into(),
        reference: None
      }
    );

    Ok(())
  }

  #[test]
  fn test_image_ref_registry() -> Result<()> {
    assert_eq!(
      image_ref("quay.io/node-exporter:v0.18.1")?,
      ImageRef {
        registry: Some(Registry {
          protocol: None,
          host: "quay.io".into(),
          port: None
        }),
        image: "node-exporter".into(),
        reference: Some(Reference::Tag("v0.18.1".into()))
      }
    );

    assert_eq!(
      image_ref("http://localhost:5000/fake_image")?,
      ImageRef {
        registry: Some(Registry {
          protocol: Some("http://".into()),
          host: "localhost".into(),
          port: Some("5000".into())
        }),
        image: "fake_image".into(),
        reference: None
      }
    );

    Ok(())
  }

  #[test]
  fn test_image_ref_digest() -> Result<()> {
    let hash = "e1c4f0ee2b4bd8e3a2d6f0bd4d1f9d8e1c4f0ee2b4bd8e3a2d6f0bd4d1f9d8ea";
    let image = image_ref(&format!("alpine@sha256:{}", hash))?;

    assert_eq!(
      image.reference,
      Some(Reference::Digest {
        algorithm: "sha256".into(),
        hash: hash.into()
      })
    );
    assert_eq!(image.tag_or_default(), format!("@sha256:{}", hash));

    Ok(())
  }

  #[test]
  fn test_image_ref_defaults() -> Result<()> {
    let image = image_ref("ubuntu")?;

    assert_eq!(image.registry_or_default(), "Docker Hub");
    assert_eq!(image.tag_or_default(), "latest");

    Ok(())
  }

  #[test]
  fn test_image_ref_display() -> Result<()> {
    let pinned = "alpine@sha256:0123456789abcdef0123456789abcdef";

    for s in vec![
      "alpine",
      "alpine:3.11",
      "myregistry.io:5000/ubuntu:20.04",
      "https://myregistry.io/ubuntu",
      pinned
    ] {
      assert_eq!(image_ref(s)?.to_string(), s);
    }

    Ok(())
  }
}
