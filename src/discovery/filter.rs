//! Client-side filtering over fetched resources

use super::item::ResourceItem;

/// Keep items sharing at least one category with `selected`.
/// An empty selection keeps everything.
pub fn filter_by_categories(items: &[ResourceItem], selected: &[i64]) -> Vec<ResourceItem> {
    if selected.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| selected.iter().any(|id| item.has_category(*id)))
        .cloned()
        .collect()
}

/// Whether `item` matches a free-text query (case-insensitive substring
/// over title, description, category titles and tags)
pub fn matches_query(item: &ResourceItem, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(item.title.as_str())
        || contains(item.description.as_str())
        || item.categories.iter().any(|c| contains(c.title.as_str()))
        || item.tags.iter().any(|t| contains(t.as_str()))
}

/// Free-text search; a blank query keeps everything
pub fn search(items: &[ResourceItem], query: &str) -> Vec<ResourceItem> {
    items
        .iter()
        .filter(|item| matches_query(item, query))
        .cloned()
        .collect()
}

/// Add `id` to the selection, or remove it when already selected
pub fn toggle_category(selected: &[i64], id: i64) -> Vec<i64> {
    if selected.contains(&id) {
        selected.iter().copied().filter(|c| *c != id).collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::item::ResourceKind;
    use crate::models::resource::Category;
    use proptest::prelude::*;

    fn item(id: i64, title: &str, description: &str, categories: &[(i64, &str)]) -> ResourceItem {
        let categories: Vec<Category> = categories
            .iter()
            .map(|(id, title)| Category { id: *id, title: title.to_string() })
            .collect();
        ResourceItem {
            kind: ResourceKind::Event,
            id,
            title: title.to_string(),
            description: description.to_string(),
            start_date: None,
            end_date: None,
            duration: None,
            location: None,
            difficulty: None,
            organizer: None,
            url: None,
            image_url: None,
            tags: categories.iter().map(|c| c.title.clone()).collect(),
            categories,
        }
    }

    fn sample() -> Vec<ResourceItem> {
        vec![
            item(1, "AI Ethics Workshop", "Hands-on ethics in AI", &[(1, "Certifications")]),
            item(2, "Global Hackathon", "48 hours of building", &[(6, "Hackathon")]),
            item(3, "Leadership Program", "Grow as a leader", &[(4, "Fellowships"), (1, "Certifications")]),
        ]
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        assert_eq!(filter_by_categories(&sample(), &[]).len(), 3);
    }

    #[test]
    fn test_category_filter_intersects() {
        let ids: Vec<i64> = filter_by_categories(&sample(), &[1]).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let ids: Vec<i64> = filter_by_categories(&sample(), &[6, 4]).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(filter_by_categories(&sample(), &[99]).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let ids = |q: &str| search(&sample(), q).iter().map(|i| i.id).collect::<Vec<_>>();

        assert_eq!(ids("hackathon"), vec![2]);
        assert_eq!(ids("ETHICS"), vec![1]);
        assert_eq!(ids("leader"), vec![3]);
        assert_eq!(ids("fellowships"), vec![3]);
        assert_eq!(ids("certif"), vec![1, 3]);
        assert_eq!(ids("   "), vec![1, 2, 3]);
        assert!(ids("quantum").is_empty());
    }

    #[test]
    fn test_toggle_category() {
        assert_eq!(toggle_category(&[], 3), vec![3]);
        assert_eq!(toggle_category(&[3, 5], 3), vec![5]);
        assert_eq!(toggle_category(&[5], 3), vec![5, 3]);
    }

    proptest! {
        #[test]
        fn prop_filtered_items_share_a_selected_category(
            selection in proptest::collection::vec(0i64..8, 1..4),
            assignments in proptest::collection::vec(proptest::collection::vec(0i64..8, 0..4), 0..12),
        ) {
            let items: Vec<ResourceItem> = assignments
                .iter()
                .enumerate()
                .map(|(i, ids)| {
                    let cats: Vec<(i64, &str)> = ids.iter().map(|id| (*id, "c")).collect();
                    item(i as i64, "t", "d", &cats)
                })
                .collect();

            let filtered = filter_by_categories(&items, &selection);
            for kept in &filtered {
                prop_assert!(selection.iter().any(|id| kept.has_category(*id)));
            }
            let expected = items
                .iter()
                .filter(|i| selection.iter().any(|id| i.has_category(*id)))
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }
}
