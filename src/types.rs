//! Core type definitions.
//!
//! Quotes read from the plain-text list, the accumulation rule applied to
//! them, and the topic/nugget shapes of a formatted document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One trimmed, non-empty line of the input destined for a quote block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote(pub String);

impl Quote {
    /// Build a quote from a raw line, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    /// The quote text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How consecutive non-empty lines are turned into quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccumulationMode {
    /// Single-slot buffer: a quote is written only once a later non-empty
    /// line starts or the input ends, and a line followed directly by
    /// another non-empty line is overwritten and lost.
    #[default]
    LastLine,
    /// Every non-empty line becomes its own quote.
    EveryLine,
}

impl AccumulationMode {
    /// Returns all modes in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::LastLine, Self::EveryLine]
    }

    /// Returns the human-readable name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LastLine => "last-line",
            Self::EveryLine => "every-line",
        }
    }
}

impl fmt::Display for AccumulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Topic metadata from a document's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Slug derived from the name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent color, e.g. `#4A90E2`.
    pub color: String,
}

/// A single titled entry in a topic document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nugget {
    /// `<topic id>-<section index>`.
    pub id: String,
    /// Text after `T:`.
    pub topic: String,
    /// Text after `D:`.
    pub description: String,
    /// Id of the owning topic.
    pub topic_id: String,
}

/// A parsed topic file: metadata plus its nuggets in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDocument {
    /// Front matter metadata.
    pub topic: Topic,
    /// Entries found in the body.
    pub nuggets: Vec<Nugget>,
}
