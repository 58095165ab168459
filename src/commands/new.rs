//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Scaffold a new content file with a front-matter template
pub fn create_post(folio: &Folio, title: &str) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&folio.content_dir)?;

    let slug = slug::slugify(title);
    let file_path = folio.content_dir.join(format!("{}.mdx", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
description: ""
publishedAt: {}
featured: false
tags: []
---

"#,
        title,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;

    #[test]
    fn test_create_post_roundtrips_through_loader() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        create_post(&folio, "My First Post").unwrap();

        let post = ContentLoader::new(&folio).get_post("my-first-post").unwrap();
        assert_eq!(post.title, "My First Post");
        assert!(post.published_at.is_some());
        assert!(!post.featured);
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        create_post(&folio, "Same Title").unwrap();
        assert!(create_post(&folio, "Same Title").is_err());
    }
}
