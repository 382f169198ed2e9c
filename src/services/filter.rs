//! Category filtering for the project and blog indexes.

use crate::models::{BlogPost, CategoryCount, Project};

/// Selection that disables filtering.
pub const ALL: &str = "All";

/// Something that can be filtered by a category-like facet.
pub trait Facets {
    /// Facet values in authored order. Blank values are ignored.
    fn facets(&self) -> Vec<&str>;

    fn has_facet(&self, selected: &str) -> bool {
        self.facets().iter().any(|f| *f == selected)
    }
}

impl Facets for Project {
    fn facets(&self) -> Vec<&str> {
        self.category.primary().into_iter().collect()
    }
}

impl Facets for BlogPost {
    fn facets(&self) -> Vec<&str> {
        self.tags
            .iter()
            .map(|t| t.as_str())
            .filter(|t| !t.trim().is_empty())
            .collect()
    }
}

/// Items matching `selected`, in input order. [`ALL`] returns every item.
pub fn filter_by_facet<'a, T: Facets>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    filter_indexed(items, selected)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

/// Like [`filter_by_facet`] but keeps each item's position in `items`, which
/// is what detail links must carry.
pub fn filter_indexed<'a, T: Facets>(items: &'a [T], selected: &str) -> Vec<(usize, &'a T)> {
    if selected == ALL {
        return items.iter().enumerate().collect();
    }
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.has_facet(selected))
        .collect()
}

/// [`ALL`] followed by every distinct facet value in first-seen order.
pub fn derive_categories<T: Facets>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL.to_string()];
    for item in items {
        for facet in item.facets() {
            if !categories.iter().any(|c| c == facet) {
                categories.push(facet.to_string());
            }
        }
    }
    categories
}

/// Facet values with the number of items carrying each; [`ALL`] carries the
/// total.
pub fn count_categories<T: Facets>(items: &[T]) -> Vec<CategoryCount> {
    derive_categories(items)
        .into_iter()
        .map(|name| {
            let count = if name == ALL {
                items.len()
            } else {
                items.iter().filter(|item| item.has_facet(&name)).count()
            };
            CategoryCount { name, count }
        })
        .collect()
}

/// Blog chips: the authored category list when there is one, otherwise counts
/// derived from tags. [`ALL`] always leads with the post total.
pub fn blog_categories(posts: &[BlogPost], authored: &[CategoryCount]) -> Vec<CategoryCount> {
    if authored.is_empty() {
        return count_categories(posts);
    }
    let mut chips = vec![CategoryCount {
        name: ALL.to_string(),
        count: posts.len(),
    }];
    chips.extend(authored.iter().filter(|c| c.name != ALL).cloned());
    chips
}
