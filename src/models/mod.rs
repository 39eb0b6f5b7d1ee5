//! Data models module
//!
//! This module contains the data-transfer records exchanged with the backend

pub mod page;
pub mod profile;
pub mod resource;
pub mod user;

// Re-export commonly used models
pub use page::{Paginated, CategoryListing, ListQuery};
pub use profile::{ProfileData, Profile, ProfileStats, TimelineEntry, TimelineEntryType, TimelineDraft};
pub use resource::{Category, Tag, Host, Event, Program, Competition};
pub use user::{User, LoginRequest, TokenPair, RegisterRequest};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
