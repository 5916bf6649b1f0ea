//! Annotation intervals and their markup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A single annotation interval over the source buffer.
///
/// Intervals are produced by an external analyzer, sorted by `position`,
/// and either nest cleanly or do not overlap at all. The renderer relies
/// on that ordering and does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Byte offset into the source where the interval begins.
    pub position: usize,
    /// Number of bytes covered. Zero marks an anchor-style marker that
    /// opens and closes in place without entering the open stack.
    #[serde(default)]
    pub length: usize,
    /// Element name used for the opening and closing markup.
    pub name: String,
    /// Pre-escaped attribute string, empty for none.
    #[serde(default)]
    pub attributes: String,
}

impl Tag {
    /// Create an interval covering `length` bytes from `position`.
    pub fn new(position: usize, length: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            length,
            name: name.into(),
            attributes: String::new(),
        }
    }

    /// Attach a pre-escaped attribute string.
    pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = attributes.into();
        self
    }

    /// Offset one past the last covered byte.
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.length)
    }

    /// Emit the opening markup.
    pub fn open<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "<{}", self.name)?;
        if !self.attributes.is_empty() {
            write!(out, " {}", self.attributes)?;
        }
        if self.length > 0 {
            out.write_all(b">")
        } else {
            // HTML5 disallows self-closing <a /> or <span /> forms, so a
            // zero-width marker is closed explicitly in place.
            write!(out, "></{}>", self.name)
        }
    }

    /// Emit the closing markup.
    pub fn close<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "</{}>", self.name)
    }
}

/// Decode an annotation list from its JSON form.
///
/// Ordering and well-nestedness are the producer's responsibility and
/// are not validated here.
pub fn parse_tags(json: &str) -> Result<Vec<Tag>> {
    let tags: Vec<Tag> = serde_json::from_str(json)?;
    Ok(tags)
}
