//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::query;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => list_posts(folio),
        "project" | "projects" => list_projects(folio),
        "tag" | "tags" => list_tags(folio),
        "featured" => list_featured(folio),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, project, tag, featured",
                content_type
            );
        }
    }

    Ok(())
}

fn list_posts(folio: &Folio) {
    let posts = match ContentLoader::new(folio).load_posts() {
        Ok(posts) => posts,
        Err(e) => {
            // An unreadable content directory degrades to an empty listing
            tracing::error!("Failed to load posts: {}", e);
            println!("No posts yet.");
            return;
        }
    };

    if posts.is_empty() {
        println!("No posts yet.");
        return;
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .published_at
            .map(|d| d.to_string())
            .unwrap_or_else(|| "undated".to_string());
        println!(
            "  {} - {} ({} min read) [{}]",
            date, post.title, post.reading_time, post.source
        );
    }
}

fn list_projects(folio: &Folio) {
    let projects = folio.projects.list();
    println!("Projects ({}):", projects.len());
    for project in projects {
        let marker = if project.featured { "*" } else { " " };
        println!(
            " {} {} - {} [{}]",
            marker, project.start_date, project.title, project.status
        );
    }
}

fn list_tags(folio: &Folio) {
    let posts = ContentLoader::new(folio)
        .load_posts()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load posts: {}", e);
            Vec::new()
        });

    let post_tags = query::tag_index(&posts);
    println!("Post tags ({}):", post_tags.len());
    for tag in post_tags {
        println!("  {} ({})", tag.name, tag.count);
    }

    let project_tags = folio.projects.all_tags();
    println!("Project tags ({}):", project_tags.len());
    for tag in project_tags {
        println!("  {}", tag);
    }
}

fn list_featured(folio: &Folio) {
    let posts = ContentLoader::new(folio)
        .load_posts()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load posts: {}", e);
            Vec::new()
        });

    let featured_posts = query::featured_only(&posts);
    println!("Featured posts ({}):", featured_posts.len());
    for post in featured_posts {
        println!("  {}", post.title);
    }

    let featured_projects = folio.projects.featured();
    println!("Featured projects ({}):", featured_projects.len());
    for project in featured_projects {
        println!("  {}", project.title);
    }
}
