//! Content loader - builds posts from the content directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::error::ContentError;
use super::{reading_time, FrontMatter, MarkdownRenderer, Post};
use crate::query;
use crate::Folio;

/// Recognized content file extension
const CONTENT_EXTENSION: &str = "mdx";

/// Loads posts from the content directory
///
/// Every call performs a fresh scan and full re-read. Posts are immutable
/// value objects, so there is nothing to invalidate between calls.
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self {
            folio,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts, most recent first
    ///
    /// Failures local to one file are logged and skipped so a single bad
    /// post never empties the listing. Only an unreadable content directory
    /// is an error, which keeps "no content exists" distinguishable from
    /// "content could not be read". A missing directory counts as empty.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        // The content directory is flat; the filename is the whole slug
        for entry in WalkDir::new(content_dir).follow_links(true).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ContentError::UnreadableDir {
                        path: content_dir.clone(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Stable sort, ties keep scan order
        query::sort_by_date_desc(&mut posts);

        Ok(posts)
    }

    /// Load a single post by slug
    pub fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
        let path = self
            .folio
            .content_dir
            .join(format!("{}.{}", slug, CONTENT_EXTENSION));

        if !path.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        self.load_post(&path)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::UnreadableFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (fm, body) = FrontMatter::parse(&content)?;

        // The filename is the only slug source; duplicate stems are a
        // data-integrity error and last-read wins
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let source = path
            .strip_prefix(&self.folio.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let published_at = fm.published_date();
        let updated_at = fm.updated_date();

        Ok(Post {
            slug,
            title: fm.title.unwrap_or_else(|| "Untitled".to_string()),
            description: fm.description.unwrap_or_default(),
            published_at,
            updated_at,
            featured: fm.featured,
            tags: fm.tags,
            reading_time: reading_time::estimate(body),
            raw: body.to_string(),
            content: self.renderer.render(body),
            source,
            extra: fm.extra,
        })
    }
}

/// Check if a file is a recognized content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXTENSION)
        .unwrap_or(false)
}
