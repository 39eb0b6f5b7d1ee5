//! Discovery module
//!
//! Turns fetched listings into one card list and narrows it by category
//! selection and free-text search. Everything here works on data already
//! in memory.

pub mod filter;
pub mod item;
pub mod merge;

pub use filter::{filter_by_categories, matches_query, search, toggle_category};
pub use item::{ResourceItem, ResourceKind};
pub use merge::{merge_resources, sort_by_title};

use crate::services::resources::ResourceBundle;

/// Merge a fetched bundle, then apply the category and text filters
pub fn discover(bundle: &ResourceBundle, selected: &[i64], query: &str) -> Vec<ResourceItem> {
    let merged = merge_resources(
        &bundle.events.results,
        &bundle.programs.results,
        &bundle.competitions.results,
    );
    search(&filter_by_categories(&merged, selected), query)
}
