//! Character pool building from a category selection.

use std::borrow::Cow;
use std::collections::BTreeSet;

use super::charset::{Category, is_ambiguous};

/// Categories chosen for one request, plus the ambiguous-character filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    categories: BTreeSet<Category>,
    avoid_ambiguous: bool,
}

impl Selection {
    /// Empty selection. Generating from it fails with `NoCategorySelected`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    pub fn with(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn avoid_ambiguous(mut self, avoid: bool) -> Self {
        self.avoid_ambiguous = avoid;
        self
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        if enabled {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }

    pub fn set_avoid_ambiguous(&mut self, avoid: bool) {
        self.avoid_ambiguous = avoid;
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn avoids_ambiguous(&self) -> bool {
        self.avoid_ambiguous
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Selected categories in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<Category> for Selection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
            avoid_ambiguous: false,
        }
    }
}

/// Characters one selected category may contribute after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    pub category: Category,
    pub chars: Cow<'static, [u8]>,
}

impl CategoryPool {
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: u8) -> bool {
        self.chars.contains(&c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pools {
    /// One entry per selected category, in catalog order. May hold empty pools.
    pub categories: Vec<CategoryPool>,
    /// Distinct characters of every non-empty category pool.
    pub union: Vec<u8>,
}

impl Pools {
    /// Category pools that must each contribute one character.
    pub fn effective(&self) -> impl Iterator<Item = &CategoryPool> {
        self.categories.iter().filter(|pool| !pool.is_empty())
    }

    /// Minimum password length that still covers every effective category.
    pub fn required_length(&self) -> usize {
        self.effective().count()
    }

    pub fn alphabet_size(&self) -> usize {
        self.union.len()
    }
}

/// Build the per-category pools and the union pool for a selection.
pub fn build_pools(selection: &Selection) -> Pools {
    build_pools_with(selection, Category::charset)
}

/// Same as [`build_pools`] with the charset of each category supplied by the
/// caller. Lets tests exercise catalogs where filtering empties a category.
pub(crate) fn build_pools_with(
    selection: &Selection,
    charset: impl Fn(Category) -> &'static [u8],
) -> Pools {
    let categories: Vec<CategoryPool> = selection
        .categories()
        .map(|category| CategoryPool {
            category,
            chars: filter(charset(category), selection.avoids_ambiguous()),
        })
        .collect();

    let union = dedup(
        categories
            .iter()
            .filter(|pool| !pool.is_empty())
            .flat_map(|pool| pool.chars.iter().copied()),
    );

    Pools { categories, union }
}

fn filter(charset: &'static [u8], avoid_ambiguous: bool) -> Cow<'static, [u8]> {
    if avoid_ambiguous && charset.iter().any(|&c| is_ambiguous(c)) {
        Cow::Owned(charset.iter().copied().filter(|&c| !is_ambiguous(c)).collect())
    } else {
        Cow::Borrowed(charset)
    }
}

/// Drop repeated bytes, keeping the first occurrence of each.
fn dedup(chars: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut seen = [false; 256];
    chars
        .filter(|&c| !std::mem::replace(&mut seen[c as usize], true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_has_no_pools() {
        let pools = build_pools(&Selection::new());
        assert!(pools.categories.is_empty());
        assert!(pools.union.is_empty());
        assert_eq!(pools.required_length(), 0);
    }

    #[test]
    fn pools_follow_catalog_order() {
        let selection = Selection::new()
            .with(Category::Symbol)
            .with(Category::Uppercase)
            .with(Category::Digit);
        let pools = build_pools(&selection);
        let order: Vec<Category> = pools.categories.iter().map(|p| p.category).collect();
        assert_eq!(
            order,
            vec![Category::Uppercase, Category::Digit, Category::Symbol]
        );
        assert_eq!(pools.union[0], b'A');
        assert_eq!(pools.alphabet_size(), 26 + 10 + 30);
    }

    #[test]
    fn unfiltered_pools_borrow_the_catalog() {
        let pools = build_pools(&Selection::all());
        assert!(
            pools
                .categories
                .iter()
                .all(|p| matches!(p.chars, Cow::Borrowed(_)))
        );
        assert_eq!(pools.alphabet_size(), 92);
    }

    #[test]
    fn ambiguous_filter_shrinks_pools() {
        let pools = build_pools(&Selection::all().avoid_ambiguous(true));
        let sizes: Vec<usize> = pools.categories.iter().map(|p| p.chars.len()).collect();
        assert_eq!(sizes, vec![24, 24, 8, 30]);
        assert_eq!(pools.alphabet_size(), 86);
        assert!(!pools.union.iter().any(|&c| is_ambiguous(c)));
        // Symbols carry nothing ambiguous, so they stay borrowed.
        assert!(matches!(pools.categories[3].chars, Cow::Borrowed(_)));
    }

    #[test]
    fn fully_ambiguous_category_is_kept_but_skipped() {
        fn charset(category: Category) -> &'static [u8] {
            match category {
                Category::Symbol => b"Il1O0o",
                other => other.charset(),
            }
        }
        let selection = Selection::new()
            .with(Category::Digit)
            .with(Category::Symbol)
            .avoid_ambiguous(true);
        let pools = build_pools_with(&selection, charset);

        assert_eq!(pools.categories.len(), 2);
        assert!(pools.categories[1].is_empty());
        assert_eq!(pools.required_length(), 1);
        assert_eq!(pools.union, b"23456789".to_vec());
    }

    #[test]
    fn union_is_deduplicated_across_overlapping_categories() {
        fn charset(category: Category) -> &'static [u8] {
            match category {
                Category::Uppercase => b"ABC",
                Category::Lowercase => b"CBx",
                other => other.charset(),
            }
        }
        let selection = Selection::new()
            .with(Category::Uppercase)
            .with(Category::Lowercase);
        let pools = build_pools_with(&selection, charset);
        assert_eq!(pools.union, b"ABCx".to_vec());
        assert_eq!(pools.required_length(), 2);
    }

    #[test]
    fn selection_toggles() {
        let mut selection = Selection::all();
        selection.set(Category::Symbol, false);
        selection.set_avoid_ambiguous(true);
        assert!(!selection.contains(Category::Symbol));
        assert!(selection.contains(Category::Digit));
        assert!(selection.avoids_ambiguous());
        assert_eq!(selection.categories().count(), 3);
    }
}
