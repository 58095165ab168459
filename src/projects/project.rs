//! Project model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::Catalogued;

/// Where a project is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Archived,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        };
        f.write_str(s)
    }
}

/// A showcased project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the catalog
    pub slug: String,

    /// Project title
    pub title: String,

    /// Short description for listings
    pub description: String,

    /// Full write-up for the detail view
    pub long_description: Option<String>,

    /// Whether the project is promoted on listing pages
    pub featured: bool,

    /// Project tags
    pub tags: Vec<String>,

    /// Source repository URL
    pub source_url: Option<String>,

    /// Live demo URL
    pub demo_url: Option<String>,

    /// Screenshot or cover image reference
    pub image_url: Option<String>,

    /// When work started
    pub start_date: NaiveDate,

    /// When work finished, if it has
    pub end_date: Option<NaiveDate>,

    /// Lifecycle status
    pub status: ProjectStatus,
}

impl Catalogued for Project {
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
        Some(self.start_date)
    }
}
