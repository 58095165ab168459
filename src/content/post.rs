//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::query::Catalogued;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Slug (URL-friendly name, derived from the filename)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short description for listings and metadata
    pub description: String,

    /// Publication date; posts without a parseable date sort last
    pub published_at: Option<NaiveDate>,

    /// Last updated date
    pub updated_at: Option<NaiveDate>,

    /// Whether the post is promoted on listing pages
    pub featured: bool,

    /// Post tags, in source order
    pub tags: Vec<String>,

    /// Estimated reading time in minutes, always at least 1
    pub reading_time: u32,

    /// Raw markdown body
    pub raw: String,

    /// Rendered HTML body
    pub content: String,

    /// Source file path relative to the content directory
    pub source: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Catalogued for Post {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        self.published_at
    }
}
