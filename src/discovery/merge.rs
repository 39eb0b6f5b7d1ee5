//! Merging the three resource kinds into one list

use std::cmp::Ordering;
use crate::models::resource::{Competition, Event, Program};
use super::item::ResourceItem;

/// Merge events, programs and competitions into one list sorted by title
pub fn merge_resources(events: &[Event], programs: &[Program], competitions: &[Competition]) -> Vec<ResourceItem> {
    let mut items: Vec<ResourceItem> = events
        .iter()
        .map(ResourceItem::from_event)
        .chain(programs.iter().map(ResourceItem::from_program))
        .chain(competitions.iter().map(ResourceItem::from_competition))
        .collect();

    sort_by_title(&mut items);
    items
}

/// Case-insensitive title order; ties fall back to the raw title, then kind and id
pub fn sort_by_title(items: &mut [ResourceItem]) {
    items.sort_by(compare_titles);
}

fn compare_titles(a: &ResourceItem, b: &ResourceItem) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.id.cmp(&b.id))
}
