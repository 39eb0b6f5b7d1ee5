//! Pagination models

use serde::{Deserialize, Serialize};
use super::resource::Category;

/// One page of a page-number paginated collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// The categories endpoint is not paginated on every deployment
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Plain(Vec<Category>),
    Paged(Paginated<Category>),
}

impl CategoryListing {
    pub fn into_vec(self) -> Vec<Category> {
        match self {
            CategoryListing::Plain(categories) => categories,
            CategoryListing::Paged(page) => page.results,
        }
    }
}

/// Query for a paginated resource listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub categories: Vec<i64>,
}

impl ListQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: &[i64]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    /// Query string pairs; categories repeat the `category` key
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        pairs.extend(
            self.categories
                .iter()
                .map(|id| ("category".to_string(), id.to_string())),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_listing_accepts_both_shapes() {
        let plain: CategoryListing =
            serde_json::from_value(json!([{"id": 1, "title": "Hackathon"}])).unwrap();
        assert_eq!(plain.into_vec().len(), 1);

        let paged: CategoryListing = serde_json::from_value(json!({
            "count": 2, "next": null, "previous": null,
            "results": [{"id": 1, "title": "Hackathon"}, {"id": 2, "title": "Fellowships"}]
        }))
        .unwrap();
        assert_eq!(paged.into_vec().len(), 2);
    }

    #[test]
    fn test_list_query_pairs() {
        let query = ListQuery::new(0, 10).with_categories(&[4, 6]);
        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "10".to_string()),
                ("category".to_string(), "4".to_string()),
                ("category".to_string(), "6".to_string()),
            ]
        );
    }
}
