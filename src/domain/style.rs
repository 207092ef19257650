//! Style descriptor and category types.
//!
//! A [`StyleDescriptor`] is one gallery entry: a display name, the category it
//! is filed under, the class name that binds it to a visual treatment, and the
//! literal CSS shown in the detail overlay. Descriptors are `'static` because
//! the catalog is compiled into the plugin and never changes at runtime.

use serde::{Deserialize, Serialize};

/// Fixed set of categories a descriptor can belong to.
///
/// Variants are declared in tab order, which is also the order in which each
/// category first appears in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Retro,
    Art,
    Futuristic,
    ThreeD,
    Handwriting,
    Classic,
    Modern,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Self; 7] = [
        Self::Retro,
        Self::Art,
        Self::Futuristic,
        Self::ThreeD,
        Self::Handwriting,
        Self::Classic,
        Self::Modern,
    ];

    /// Stable tag used in configuration and logs (`"retro"`, `"3d"`, ...).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Retro => "retro",
            Self::Art => "art",
            Self::Futuristic => "futuristic",
            Self::ThreeD => "3d",
            Self::Handwriting => "handwriting",
            Self::Classic => "classic",
            Self::Modern => "modern",
        }
    }

    /// Display label shown on the category tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retro => "레트로",
            Self::Art => "아트",
            Self::Futuristic => "미래적",
            Self::ThreeD => "3D",
            Self::Handwriting => "손글씨",
            Self::Classic => "클래식",
            Self::Modern => "모던",
        }
    }
}

/// Active category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Matches every descriptor.
    #[default]
    All,
    /// Matches descriptors of exactly this category.
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter in tab order, starting with [`CategoryFilter::All`].
    #[must_use]
    pub fn tabs() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    /// Returns `true` if a descriptor of `category` passes this filter.
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Tag form of the filter; `"all"` for [`CategoryFilter::All`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.tag(),
        }
    }

    /// Tab label for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Only(category) => category.label(),
        }
    }

    /// Position of this filter in [`CategoryFilter::tabs`].
    #[must_use]
    pub fn tab_index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(category) => {
                Category::ALL
                    .iter()
                    .position(|c| *c == category)
                    .unwrap_or(0)
                    + 1
            }
        }
    }

    /// Filter at `index` in tab order, wrapping around in both directions.
    #[must_use]
    pub fn from_tab_index(index: isize) -> Self {
        let tabs = Self::tabs();
        let len = tabs.len() as isize;
        let wrapped = index.rem_euclid(len) as usize;
        tabs[wrapped]
    }
}

/// One entry of the style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Unique, stable identifier; the detail trigger of a card carries it.
    pub id: &'static str,
    /// Human-readable name shown on the card.
    pub display_name: &'static str,
    /// Category used by the category filter.
    pub category: Category,
    /// Category label shown on the card and matched by search (case-sensitive).
    pub category_label: &'static str,
    /// Class name resolved to a visual treatment by the UI layer.
    pub style_class: &'static str,
    /// Whether the preview must also carry the sample text as an echo attribute.
    pub requires_echo_attribute: bool,
    /// CSS shown verbatim in the detail overlay and copied to the clipboard.
    pub raw_style_code: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_starts_with_all() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs.len(), 8);
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(tabs[4], CategoryFilter::Only(Category::ThreeD));
        for (i, tab) in tabs.iter().enumerate() {
            assert_eq!(tab.tab_index(), i);
        }
    }

    #[test]
    fn tab_index_wraps() {
        assert_eq!(
            CategoryFilter::from_tab_index(-1),
            CategoryFilter::Only(Category::Modern)
        );
        assert_eq!(CategoryFilter::from_tab_index(8), CategoryFilter::All);
    }

    #[test]
    fn all_admits_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.admits(category));
        }
        assert!(!CategoryFilter::Only(Category::Art).admits(Category::Retro));
    }
}
