//! Query and aggregation over content collections
//!
//! Posts and projects share the same query shape: both are slugged, tagged,
//! dated, and optionally featured. Everything here is a pure transformation
//! over an immutable snapshot.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// A record the query layer can sort, filter, and aggregate
pub trait Catalogued {
    /// Unique identifier within the collection
    fn slug(&self) -> &str;

    /// Tags in source order
    fn tags(&self) -> &[String];

    /// Whether the entry is promoted to prioritized display position
    fn featured(&self) -> bool;

    /// Date used for chronological ordering; `None` sorts last
    fn sort_date(&self) -> Option<NaiveDate>;
}

/// A tag with usage count across a collection
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// Entries whose tag list contains `tag`, exact case-sensitive match
pub fn filter_by_tag<'a, E: Catalogued>(entries: &'a [E], tag: &str) -> Vec<&'a E> {
    entries
        .iter()
        .filter(|e| e.tags().iter().any(|t| t == tag))
        .collect()
}

/// Entries flagged as featured, in collection order
pub fn featured_only<E: Catalogued>(entries: &[E]) -> Vec<&E> {
    entries.iter().filter(|e| e.featured()).collect()
}

/// Every distinct tag across the collection, lexicographically ascending
pub fn all_tags<E: Catalogued>(entries: &[E]) -> Vec<String> {
    let tags: BTreeSet<&str> = entries
        .iter()
        .flat_map(|e| e.tags())
        .map(String::as_str)
        .collect();
    tags.into_iter().map(String::from).collect()
}

/// Per-tag usage counts, most used first, name as tie-breaker
pub fn tag_index<E: Catalogued>(entries: &[E]) -> Vec<Tag> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for entry in entries {
        for tag in entry.tags() {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut index: Vec<Tag> = counts
        .into_iter()
        .map(|(name, count)| Tag {
            name: name.to_string(),
            slug: slug::slugify(name),
            count,
        })
        .collect();

    index.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    index
}

/// Sort entries newest first; dateless entries last, ties keep their order
pub fn sort_by_date_desc<E: Catalogued>(entries: &mut [E]) {
    entries.sort_by(|a, b| cmp_dates_desc(a.sort_date(), b.sort_date()));
}

/// Descending comparison for optional dates, `None` ordered after any date
pub(crate) fn cmp_dates_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        slug: &'static str,
        tags: Vec<String>,
        featured: bool,
        date: Option<NaiveDate>,
    }

    impl Catalogued for Item {
        fn slug(&self) -> &str {
            self.slug
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn featured(&self) -> bool {
            self.featured
        }

        fn sort_date(&self) -> Option<NaiveDate> {
            self.date
        }
    }

    fn item(slug: &'static str, tags: &[&str], featured: bool, date: Option<&str>) -> Item {
        Item {
            slug,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured,
            date: date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
        }
    }

    #[test]
    fn test_all_tags_deduplicated_and_sorted() {
        let items = vec![
            item("one", &["a", "c"], false, None),
            item("two", &["b", "a"], false, None),
        ];
        assert_eq!(all_tags(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_by_tag_is_case_sensitive() {
        let items = vec![
            item("one", &["Rust"], false, None),
            item("two", &["rust"], false, None),
        ];
        let matched = filter_by_tag(&items, "Rust");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug(), "one");
    }

    #[test]
    fn test_featured_only() {
        let items = vec![
            item("one", &[], true, None),
            item("two", &[], false, None),
            item("three", &[], true, None),
        ];
        let featured: Vec<_> = featured_only(&items).iter().map(|e| e.slug()).collect();
        assert_eq!(featured, vec!["one", "three"]);
    }

    #[test]
    fn test_sort_by_date_desc_with_dateless_last() {
        let mut items = vec![
            item("undated", &[], false, None),
            item("old", &[], false, Some("2020-05-01")),
            item("new", &[], false, Some("2024-05-01")),
        ];
        sort_by_date_desc(&mut items);
        let slugs: Vec<_> = items.iter().map(|e| e.slug()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let mut items = vec![
            item("first", &[], false, Some("2024-01-01")),
            item("second", &[], false, Some("2024-01-01")),
            item("third", &[], false, Some("2024-01-01")),
        ];
        sort_by_date_desc(&mut items);
        let slugs: Vec<_> = items.iter().map(|e| e.slug()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tag_index_counts_and_slugs() {
        let items = vec![
            item("one", &["Rust", "Web Dev"], false, None),
            item("two", &["Rust"], false, None),
        ];
        let index = tag_index(&items);
        assert_eq!(index[0].name, "Rust");
        assert_eq!(index[0].count, 2);
        assert_eq!(index[1].name, "Web Dev");
        assert_eq!(index[1].slug, "web-dev");
        assert_eq!(index[1].count, 1);
    }
}
