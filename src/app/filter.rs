//! The filter engine: catalog + category + search text → visible descriptors.
//!
//! Matching rules:
//!
//! - category: [`CategoryFilter::All`] admits everything, otherwise exact match
//! - search: the lowercased display name contains the search text, **or** the
//!   category label contains it as-is (no case folding on the label)
//!
//! The search text is expected to be lowercased already; the controller does
//! that when the search field changes. Output keeps catalog order.

use crate::domain::{CategoryFilter, StyleDescriptor};

/// Returns `true` if `descriptor` passes both the category and search filters.
#[must_use]
pub fn matches(descriptor: &StyleDescriptor, category: CategoryFilter, search_text: &str) -> bool {
    if !category.admits(descriptor.category) {
        return false;
    }

    descriptor.display_name.to_lowercase().contains(search_text)
        || descriptor.category_label.contains(search_text)
}

/// Filters `catalog`, preserving its order.
///
/// # Example
///
/// ```rust
/// use fontlab::app::filter::filter_catalog;
/// use fontlab::domain::{catalog::CATALOG, CategoryFilter};
///
/// let visible = filter_catalog(CATALOG, CategoryFilter::All, "");
/// assert_eq!(visible.len(), CATALOG.len());
/// ```
#[must_use]
pub fn filter_catalog<'a>(
    catalog: &'a [StyleDescriptor],
    category: CategoryFilter,
    search_text: &str,
) -> Vec<&'a StyleDescriptor> {
    let _span = tracing::trace_span!(
        "filter_catalog",
        category = category.tag(),
        search_len = search_text.len()
    )
    .entered();

    catalog
        .iter()
        .filter(|d| matches(d, category, search_text))
        .collect()
}

/// Byte range of the first occurrence of `search_text` in the lowercased
/// `display_name`, converted to char indices for highlighting.
///
/// Returns `None` for an empty search or when only the category label matched.
#[must_use]
pub fn name_match_range(display_name: &str, search_text: &str) -> Option<(usize, usize)> {
    if search_text.is_empty() {
        return None;
    }

    let lowered = display_name.to_lowercase();
    let byte_start = lowered.find(search_text)?;
    let start = lowered[..byte_start].chars().count();
    let len = search_text.chars().count();

    // Lowercasing can change char counts for a few scripts; skip the
    // highlight rather than point at the wrong glyphs.
    if lowered.chars().count() != display_name.chars().count() {
        return None;
    }

    Some((start, start + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CATALOG;
    use crate::domain::Category;

    fn ids(visible: &[&StyleDescriptor]) -> Vec<&'static str> {
        visible.iter().map(|d| d.id).collect()
    }

    #[test]
    fn all_with_empty_search_is_the_whole_catalog() {
        let visible = filter_catalog(CATALOG, CategoryFilter::All, "");
        assert_eq!(ids(&visible), CATALOG.iter().map(|d| d.id).collect::<Vec<_>>());
    }

    #[test]
    fn category_filter_keeps_catalog_order() {
        let visible = filter_catalog(CATALOG, CategoryFilter::Only(Category::Handwriting), "");
        assert_eq!(ids(&visible), vec!["chalk", "brush", "calligraphy", "sketchy"]);
    }

    #[test]
    fn label_search_finds_every_retro_entry() {
        let visible = filter_catalog(CATALOG, CategoryFilter::All, "레트로");
        assert_eq!(ids(&visible), vec!["neon-glow", "retro-sunset", "arcade"]);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        // "3D" label does not match "3d"; only the name "3D 엠보스" does, via lowercasing.
        let visible = filter_catalog(CATALOG, CategoryFilter::All, "3d");
        assert_eq!(ids(&visible), vec!["emboss"]);
    }

    #[test]
    fn search_and_category_combine() {
        let visible = filter_catalog(CATALOG, CategoryFilter::Only(Category::Futuristic), "네온");
        assert_eq!(ids(&visible), vec!["neon-blue"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_catalog(CATALOG, CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn name_match_range_uses_char_indices() {
        assert_eq!(name_match_range("레트로 선셋", "선셋"), Some((4, 6)));
        assert_eq!(name_match_range("3D 엠보스", "3d"), Some((0, 2)));
        assert_eq!(name_match_range("아트", ""), None);
        assert_eq!(name_match_range("아트", "x"), None);
    }
}
