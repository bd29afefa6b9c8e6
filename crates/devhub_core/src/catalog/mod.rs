//! Hardcoded reference catalogs and their search projections.
//!
//! # Responsibility
//! - Carry the static reference datasets (CDN links, shortcuts, git
//!   commands, code snippets, common errors).
//! - Expose the shared `(query, category)` search over each searchable
//!   dataset.
//!
//! # Invariants
//! - Datasets are constant; searches never mutate and preserve data
//!   order.

use crate::filter::text::{matches_category, matches_query, ALL_CATEGORIES};

pub mod errors;
pub mod resources;
pub mod shortcuts;
pub mod snippets;

pub use errors::COMMON_ERRORS;
pub use resources::CDN_RESOURCES;
pub use shortcuts::{GIT_COMMAND_GROUPS, SHORTCUT_GROUPS};
pub use snippets::CODE_SNIPPETS;

/// One CDN-hosted library or helpful site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdnResource {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub version: Option<&'static str>,
    pub popular: bool,
}

/// One copy-pastable code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSnippet {
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
    pub code: &'static str,
    pub category: &'static str,
}

/// One catalogued error with its fix checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonError {
    pub title: &'static str,
    pub description: &'static str,
    pub error: &'static str,
    pub solution: &'static str,
    pub category: &'static str,
}

/// One titled group of keyboard shortcuts, `(keys, action)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutGroup {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

/// One titled group of git commands, `(command, description)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandGroup {
    pub title: &'static str,
    pub commands: &'static [(&'static str, &'static str)],
}

/// Searches CDN resources by free text (name, description) and category.
pub fn search_resources(query: &str, category: &str) -> Vec<&'static CdnResource> {
    CDN_RESOURCES
        .iter()
        .filter(|resource| matches_query(query, [resource.name, resource.description]))
        .filter(|resource| matches_category(category, resource.category))
        .collect()
}

/// Searches snippets by free text (title, description, code) and category.
pub fn search_snippets(query: &str, category: &str) -> Vec<&'static CodeSnippet> {
    CODE_SNIPPETS
        .iter()
        .filter(|snippet| {
            matches_query(query, [snippet.title, snippet.description, snippet.code])
        })
        .filter(|snippet| matches_category(category, snippet.category))
        .collect()
}

/// Searches the error catalog by free text (title, description, error
/// text, solution) and category.
pub fn search_errors(query: &str, category: &str) -> Vec<&'static CommonError> {
    COMMON_ERRORS
        .iter()
        .filter(|entry| {
            matches_query(
                query,
                [entry.title, entry.description, entry.error, entry.solution],
            )
        })
        .filter(|entry| matches_category(category, entry.category))
        .collect()
}

/// Selectable resource categories with entry counts, `all` first.
pub fn resource_categories() -> Vec<(&'static str, usize)> {
    let mut categories = vec![(ALL_CATEGORIES, CDN_RESOURCES.len())];
    for resource in CDN_RESOURCES {
        match categories
            .iter_mut()
            .find(|(name, _)| *name == resource.category)
        {
            Some((_, count)) => *count += 1,
            None => categories.push((resource.category, 1)),
        }
    }
    categories
}

/// Selectable snippet categories, `all` first, in data order.
pub fn snippet_categories() -> Vec<&'static str> {
    distinct_categories(CODE_SNIPPETS.iter().map(|snippet| snippet.category))
}

/// Selectable error categories, `all` first, in data order.
pub fn error_categories() -> Vec<&'static str> {
    distinct_categories(COMMON_ERRORS.iter().map(|entry| entry.category))
}

fn distinct_categories(all: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for category in all {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::{
        error_categories, resource_categories, search_errors, search_resources, search_snippets,
    };

    #[test]
    fn resource_search_is_case_insensitive_over_name_and_description() {
        let hits = search_resources("TAILWIND", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tailwind CSS");

        let by_description = search_resources("flexbox", "all");
        assert!(by_description.iter().any(|r| r.name == "Bulma"));
    }

    #[test]
    fn category_selector_narrows_resources_and_all_is_identity() {
        let css_only = search_resources("", "css");
        assert!(css_only.iter().all(|r| r.category == "css"));
        assert_eq!(
            search_resources("", "all").len(),
            super::CDN_RESOURCES.len()
        );
    }

    #[test]
    fn resource_categories_lead_with_all_and_count_entries() {
        let categories = resource_categories();
        assert_eq!(categories[0], ("all", super::CDN_RESOURCES.len()));
        let total: usize = categories.iter().skip(1).map(|(_, count)| count).sum();
        assert_eq!(total, super::CDN_RESOURCES.len());
    }

    #[test]
    fn snippet_search_matches_code_body() {
        let hits = search_snippets("justify-content", "all");
        assert!(hits.iter().any(|s| s.title == "CSS Flexbox Center"));
    }

    #[test]
    fn error_search_matches_solution_text_and_respects_category() {
        let hits = search_errors("composer dump-autoload", "laravel");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|e| e.category == "laravel"));
        assert!(search_errors("composer dump-autoload", "git").is_empty());
    }

    #[test]
    fn error_categories_are_distinct_in_data_order() {
        let categories = error_categories();
        assert_eq!(categories[0], "all");
        assert!(categories.contains(&"laravel"));
        assert!(categories.contains(&"mysql"));
        assert!(categories.contains(&"git"));
    }
}
