//! Reader for formatted topic documents.
//!
//! A topic document is YAML-like front matter (`name`, `description`, `color`)
//! followed by blank-line separated sections, each carrying a `T:` title line
//! and a `D:` description line. This is the shape the converter writes and the
//! notes learner loads.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::document::FRONT_MATTER_DELIMITER;
use crate::constants::topic::{DEFAULT_COLOR, DEFAULT_ID, DEFAULT_NAME};
use crate::converter::read_text;
use crate::error::{Error, Result};
use crate::types::{Nugget, Topic, TopicDocument};

/// Regex matching a `key: value` front matter line.
#[allow(clippy::expect_used)]
static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(.*)$").expect("valid regex: RE_FIELD")
});

/// Regex matching runs of whitespace in a topic name.
#[allow(clippy::expect_used)]
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_SPACES")
});

#[derive(Debug, Default)]
struct FrontMatter {
    name: Option<String>,
    description: Option<String>,
    color: Option<String>,
}

/// Split a document into its front matter fields and body.
fn split_front_matter(text: &str) -> Result<(FrontMatter, &str)> {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((FrontMatter::default(), text));
    };
    if first.trim_end() != FRONT_MATTER_DELIMITER {
        return Ok((FrontMatter::default(), text));
    }

    let mut fields = FrontMatter::default();
    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        let line = line.trim();
        if line == FRONT_MATTER_DELIMITER {
            return Ok((fields, &text[offset..]));
        }
        let Some(caps) = RE_FIELD.captures(line) else {
            continue;
        };
        let value = caps[2].trim().to_string();
        match &caps[1] {
            "name" => fields.name = Some(value),
            "description" => fields.description = Some(value),
            "color" => fields.color = Some(value),
            other => tracing::debug!("Ignoring front matter key {other}"),
        }
    }

    Err(Error::parse("front matter is missing its closing `---`", None))
}

/// Derive a topic id from its name: lowercase, whitespace runs become `-`.
fn slugify(name: &str) -> String {
    RE_SPACES.replace_all(&name.to_lowercase(), "-").into_owned()
}

fn build_topic(fields: FrontMatter) -> Topic {
    let id = fields
        .name
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ID.to_string());
    Topic {
        id,
        name: fields.name.filter(|n| !n.is_empty()).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        description: fields.description.filter(|d| !d.is_empty()),
        color: fields.color.filter(|c| !c.is_empty()).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
    }
}

fn parse_nuggets(body: &str, topic_id: &str) -> Vec<Nugget> {
    let mut nuggets = Vec::new();
    let body = body.replace("\r\n", "\n");
    let sections = body.split("\n\n").filter(|s| !s.trim().is_empty());

    for (index, section) in sections.enumerate() {
        let mut title = "";
        let mut description = "";
        for line in section.lines().map(str::trim) {
            if let Some(rest) = line.strip_prefix("T:") {
                title = rest.trim();
            } else if let Some(rest) = line.strip_prefix("D:") {
                description = rest.trim();
            }
        }

        if title.is_empty() || description.is_empty() {
            tracing::debug!("Skipping section {index} without both T: and D: lines");
            continue;
        }

        nuggets.push(Nugget {
            id: format!("{topic_id}-{index}"),
            topic: title.to_string(),
            description: description.to_string(),
            topic_id: topic_id.to_string(),
        });
    }

    nuggets
}

/// Parse a topic document from text.
pub fn parse_topic(text: &str) -> Result<TopicDocument> {
    let (fields, body) = split_front_matter(text)?;
    let topic = build_topic(fields);
    let nuggets = parse_nuggets(body, &topic.id);
    Ok(TopicDocument { topic, nuggets })
}

/// Read and parse a topic document from disk.
pub fn load_topic(path: impl AsRef<Path>) -> Result<TopicDocument> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let doc = parse_topic(&text).map_err(|e| e.in_file(path))?;
    tracing::info!("Parsed {} nuggets from {}", doc.nuggets.len(), path.display());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::converter::convert_str;
    use crate::types::AccumulationMode;

    #[test]
    fn test_parse_converter_output() {
        let (doc, _) = convert_str("Be yourself.\n\nStay curious.\n", AccumulationMode::LastLine);
        let parsed = parse_topic(&doc).unwrap();

        assert_eq!(parsed.topic.id, "quotes");
        assert_eq!(parsed.topic.name, "Quotes");
        assert_eq!(
            parsed.topic.description.as_deref(),
            Some("Collection of memorable quotes and thoughts")
        );
        assert_eq!(parsed.topic.color, "#4A90E2");

        let descriptions: Vec<_> = parsed.nuggets.iter().map(|n| n.description.as_str()).collect();
        assert_eq!(descriptions, ["Be yourself.", "Stay curious."]);
        assert!(parsed.nuggets.iter().all(|n| n.topic == "Quote" && n.topic_id == "quotes"));
        assert_eq!(parsed.nuggets[0].id, "quotes-0");
        assert_eq!(parsed.nuggets[1].id, "quotes-1");
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        let parsed = parse_topic("---\nname: Rust   Ownership Rules\n---\n").unwrap();
        assert_eq!(parsed.topic.id, "rust-ownership-rules");
        assert!(parsed.nuggets.is_empty());
    }

    #[test]
    fn test_missing_front_matter_uses_default_topic() {
        let parsed = parse_topic("T: Borrowing\nD: One mutable or many shared.\n").unwrap();
        assert_eq!(parsed.topic.id, "default");
        assert_eq!(parsed.topic.name, "Default Topic");
        assert_eq!(parsed.topic.color, "#4A90E2");
        assert_eq!(parsed.nuggets.len(), 1);
        assert_eq!(parsed.nuggets[0].id, "default-0");
    }

    #[test]
    fn test_unterminated_front_matter_is_an_error() {
        let err = parse_topic("---\nname: Quotes\n\nT: Quote\nD: x\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_incomplete_sections_are_skipped_but_keep_index() {
        let text = "---\nname: Notes\n---\n\nT: Only a title\n\nT: Full\nD: Entry\n";
        let parsed = parse_topic(text).unwrap();
        assert_eq!(parsed.nuggets.len(), 1);
        assert_eq!(parsed.nuggets[0].id, "notes-1");
        assert_eq!(parsed.nuggets[0].topic, "Full");
    }
}
