//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: AuthorConfig,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,

    // Navigation
    pub nav: Vec<NavItem>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: "A personal portfolio and blog".to_string(),
            author: AuthorConfig::default(),
            url: "http://example.com".to_string(),
            content_dir: "content/blog".to_string(),
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("About", "/about"),
                NavItem::new("Blog", "/blog"),
                NavItem::new("Projects", "/projects"),
            ],
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Social links derived from the author's contact fields
    ///
    /// Pure string formatting over fixed URL templates; only the platforms
    /// the author actually configured are included.
    pub fn social_links(&self) -> Vec<SocialLink> {
        let author = &self.author;
        let mut links = Vec::new();

        if let Some(github) = &author.github {
            links.push(SocialLink {
                name: "GitHub".to_string(),
                url: format!("https://github.com/{}", github),
                icon: "github".to_string(),
            });
        }

        if let Some(twitter) = &author.twitter {
            links.push(SocialLink {
                name: "Twitter".to_string(),
                url: format!("https://twitter.com/{}", twitter.trim_start_matches('@')),
                icon: "twitter".to_string(),
            });
        }

        if let Some(linkedin) = &author.linkedin {
            links.push(SocialLink {
                name: "LinkedIn".to_string(),
                url: format!("https://linkedin.com/in/{}", linkedin),
                icon: "linkedin".to_string(),
            });
        }

        links.push(SocialLink {
            name: "Email".to_string(),
            url: format!("mailto:{}", author.email),
            icon: "mail".to_string(),
        });

        links
    }
}

/// Author identity used for bylines and social links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "hello@example.com".to_string(),
            twitter: None,
            github: None,
            linkedin: None,
        }
    }
}

/// A navigation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub description: Option<String>,
    pub external: bool,
}

impl NavItem {
    fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            description: None,
            external: false,
        }
    }
}

impl Default for NavItem {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A derived social-link record
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.nav.len(), 4);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Corner
author:
  name: Test User
  email: me@my-corner.dev
  github: testuser
content_dir: posts
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Corner");
        assert_eq!(config.author.name, "Test User");
        assert_eq!(config.content_dir, "posts");
    }

    #[test]
    fn test_social_links_only_configured_platforms() {
        let config = SiteConfig::default();
        let links = config.social_links();
        // No handles configured, so only the mailto link remains
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "Email");
        assert_eq!(links[0].url, "mailto:hello@example.com");
    }

    #[test]
    fn test_social_links_strip_twitter_handle() {
        let config = SiteConfig {
            author: AuthorConfig {
                twitter: Some("@someone".to_string()),
                github: Some("someone".to_string()),
                ..AuthorConfig::default()
            },
            ..SiteConfig::default()
        };

        let links = config.social_links();
        let twitter = links.iter().find(|l| l.name == "Twitter").unwrap();
        assert_eq!(twitter.url, "https://twitter.com/someone");
        let github = links.iter().find(|l| l.name == "GitHub").unwrap();
        assert_eq!(github.url, "https://github.com/someone");
    }
}
