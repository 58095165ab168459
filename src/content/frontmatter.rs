//! Front-matter parsing

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::error::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "publishedAt", alias = "date")]
    pub published_at: Option<String>,
    #[serde(rename = "updatedAt", alias = "updated")]
    pub updated_at: Option<String>,
    pub featured: bool,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A file without a front-matter block yields the default struct and the
    /// whole input as body. A block that is present but does not deserialize
    /// is an error, so the loader can skip that file without touching its
    /// siblings.
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter ({"key": ...)
        if content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat the whole file as body
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Ok((fm, remaining)),
            Err(e) => Err(ContentError::MalformedFrontMatter(e.to_string())),
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        // Find the matching closing brace
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(ContentError::MalformedFrontMatter(
                "unbalanced JSON front matter".to_string(),
            ));
        }

        let json_content = &content[..end_pos];
        let remaining = &content[end_pos..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        let fm: FrontMatter = serde_json::from_str(json_content)
            .map_err(|e| ContentError::MalformedFrontMatter(e.to_string()))?;

        Ok((fm, remaining))
    }

    /// Parse the publishedAt string into a date
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.published_at.as_deref().and_then(parse_date_string)
    }

    /// Parse the updatedAt string into a date
    pub fn updated_date(&self) -> Option<NaiveDate> {
        self.updated_at.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in various formats
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Datetime forms keep only the date part
    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
publishedAt: 2024-01-15
tags:
  - rust
  - blog
featured: true
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.tags, vec!["rust", "blog"]);
        assert!(fm.featured);
        assert_eq!(fm.published_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Post", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = r#"---
title: Single Tag Post
publishedAt: 2024-01-15
tags: notes
---

Content here.
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["notes"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body with no metadata.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(!fm.featured);
        assert!(fm.tags.is_empty());
        assert!(remaining.contains("Just a body"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\n\nBody.\n";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::MalformedFrontMatter(_)));
    }

    #[test]
    fn test_date_alias() {
        let content = "---\ntitle: Aliased\ndate: 2023/06/01\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.published_date(), NaiveDate::from_ymd_opt(2023, 6, 1));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(
            parse_date_string("2024-01-15 10:30:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date_string("2024-01-15T10:30:00+02:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date_string("not a date"), None);
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let content = "---\ntitle: X\nseries: deep-dives\n---\nBody.\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.extra.contains_key("series"));
    }
}
