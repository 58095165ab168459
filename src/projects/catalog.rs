//! Project catalog - a fixed, in-memory project collection

use chrono::NaiveDate;

use super::{Project, ProjectStatus};
use crate::query;

/// A read-only collection of projects, constructed once at startup
///
/// The catalog is a stand-in for what would otherwise be a real content or
/// database source. It is injected into the [`Folio`](crate::Folio) root
/// instead of living as ambient global state, so a future data source can
/// replace it without touching callers.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Create a catalog from explicit records
    ///
    /// Slugs are expected to be unique; duplicates are a data-integrity
    /// error and lookups resolve to the first match.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The built-in sample dataset
    pub fn with_sample_data() -> Self {
        Self::new(sample_projects())
    }

    /// All projects: featured first, then newest start date, ties in
    /// catalog order
    pub fn list(&self) -> Vec<&Project> {
        let mut items: Vec<&Project> = self.projects.iter().collect();
        items.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| b.start_date.cmp(&a.start_date))
        });
        items
    }

    /// Look up a project by slug
    pub fn get(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Projects flagged as featured
    pub fn featured(&self) -> Vec<&Project> {
        query::featured_only(&self.projects)
    }

    /// Projects whose tag list contains `tag`
    pub fn by_tag(&self, tag: &str) -> Vec<&Project> {
        query::filter_by_tag(&self.projects, tag)
    }

    /// Projects with the given lifecycle status
    pub fn by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    /// Every distinct tag across the catalog, sorted
    pub fn all_tags(&self) -> Vec<String> {
        query::all_tags(&self.projects)
    }

    /// Number of projects in the catalog
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// Seed records for the showcase
fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            slug: "folio-engine".to_string(),
            title: "Folio Content Engine".to_string(),
            description: "A file-based content engine that turns front-matter \
                          annotated markdown into a queryable blog collection."
                .to_string(),
            long_description: Some(
                "Reads a directory of markdown posts, parses front matter, \
                 derives reading times, and exposes sorting, tag filtering \
                 and aggregation over the result. No database, no cache, no \
                 moving parts."
                    .to_string(),
            ),
            featured: true,
            tags: vec![
                "Rust".to_string(),
                "Markdown".to_string(),
                "Static Sites".to_string(),
            ],
            source_url: Some("https://github.com/chenyukang/folio-engine".to_string()),
            demo_url: Some("https://folio-engine-demo.pages.dev".to_string()),
            image_url: Some("/images/projects/folio-engine.png".to_string()),
            start_date: date(2024, 1, 1),
            end_date: Some(date(2024, 1, 15)),
            status: ProjectStatus::Completed,
        },
        Project {
            slug: "latency-lens".to_string(),
            title: "Latency Lens".to_string(),
            description: "A terminal dashboard for watching request latency \
                          percentiles across services in real time."
                .to_string(),
            long_description: Some(
                "Streams timing samples from log files, keeps sliding-window \
                 histograms per service, and renders p50/p95/p99 sparklines \
                 in the terminal. Alert thresholds are configurable per \
                 service."
                    .to_string(),
            ),
            featured: true,
            tags: vec![
                "Rust".to_string(),
                "TUI".to_string(),
                "Observability".to_string(),
            ],
            source_url: Some("https://github.com/chenyukang/latency-lens".to_string()),
            demo_url: None,
            image_url: Some("/images/projects/latency-lens.png".to_string()),
            start_date: date(2023, 11, 1),
            end_date: Some(date(2023, 12, 15)),
            status: ProjectStatus::Completed,
        },
        Project {
            slug: "inkwell-notes".to_string(),
            title: "Inkwell Notes".to_string(),
            description: "A keyboard-driven note-taking app with full-text \
                          search and wiki-style links."
                .to_string(),
            long_description: Some(
                "Plain markdown files on disk, an incremental full-text \
                 index, and backlink resolution between notes. Every action \
                 is reachable from the keyboard."
                    .to_string(),
            ),
            featured: false,
            tags: vec![
                "Rust".to_string(),
                "Search".to_string(),
                "Markdown".to_string(),
            ],
            source_url: Some("https://github.com/chenyukang/inkwell-notes".to_string()),
            demo_url: None,
            image_url: None,
            start_date: date(2023, 9, 1),
            end_date: None,
            status: ProjectStatus::InProgress,
        },
        Project {
            slug: "hexo-theme-vexo".to_string(),
            title: "Vexo Theme".to_string(),
            description: "A minimal, typography-first blog theme with dark \
                          mode and zero client-side JavaScript."
                .to_string(),
            long_description: None,
            featured: false,
            tags: vec![
                "CSS".to_string(),
                "Design".to_string(),
                "Static Sites".to_string(),
            ],
            source_url: Some("https://github.com/chenyukang/hexo-theme-vexo".to_string()),
            demo_url: Some("https://vexo-demo.pages.dev".to_string()),
            image_url: Some("/images/projects/vexo.png".to_string()),
            start_date: date(2023, 8, 1),
            end_date: Some(date(2023, 8, 30)),
            status: ProjectStatus::Archived,
        },
    ]
}
