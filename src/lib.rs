//! folio-rs: a file-based content engine for portfolio and blog sites
//!
//! This crate loads front-matter-annotated markdown posts from a content
//! directory, derives reading times, and exposes sorting, filtering, and
//! tag aggregation over both posts and an in-memory project catalog.

pub mod commands;
pub mod config;
pub mod content;
pub mod projects;
pub mod query;

use anyhow::Result;
use std::path::Path;

use projects::ProjectCatalog;

/// The main Folio application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Blog content directory
    pub content_dir: std::path::PathBuf,
    /// Project catalog, constructed once at startup
    pub projects: ProjectCatalog,
}

impl Folio {
    /// Create a new Folio instance from a directory, seeded with the
    /// sample project catalog
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_projects(base_dir, ProjectCatalog::with_sample_data())
    }

    /// Create a Folio instance with an explicit project catalog
    ///
    /// This is the seam for swapping the sample dataset out for a real
    /// data source.
    pub fn with_projects<P: AsRef<Path>>(base_dir: P, projects: ProjectCatalog) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading site config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            projects,
        })
    }

    /// All blog posts, most recent first
    pub fn posts(&self) -> Result<Vec<content::Post>, content::ContentError> {
        content::ContentLoader::new(self).load_posts()
    }

    /// A single blog post by slug
    pub fn post(&self, slug: &str) -> Result<content::Post, content::ContentError> {
        content::ContentLoader::new(self).get_post(slug)
    }
}
