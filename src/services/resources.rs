//! Resource service implementation
//!
//! Fetches events, programs, competitions and categories. Listings are
//! page-number paginated and optionally filtered by category id.

use tracing::debug;
use crate::models::page::{CategoryListing, ListQuery, Paginated};
use crate::models::resource::{Category, Competition, Event, Program};
use crate::services::api::ApiClient;
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::logging::log_fetch_summary;

pub const EVENTS_PATH: &str = "/api/resources/events/";
pub const PROGRAMS_PATH: &str = "/api/resources/programs/";
pub const COMPETITIONS_PATH: &str = "/api/resources/competitions/";
pub const CATEGORIES_PATH: &str = "/api/resources/categories/";

/// The three listings fetched for one page load
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBundle {
    pub events: Paginated<Event>,
    pub programs: Paginated<Program>,
    pub competitions: Paginated<Competition>,
}

impl ResourceBundle {
    pub fn total_count(&self) -> u64 {
        self.events.count + self.programs.count + self.competitions.count
    }
}

/// Resource service for browsing listings
#[derive(Clone, Debug)]
pub struct ResourceService {
    api: ApiClient,
    page_size: u32,
}

impl ResourceService {
    /// Create a new ResourceService instance
    pub fn new(api: ApiClient, page_size: u32) -> Self {
        Self { api, page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Default query for the given page and category selection
    pub fn query(&self, page: u32, categories: &[i64]) -> ListQuery {
        ListQuery::new(page, self.page_size).with_categories(categories)
    }

    pub async fn list_events(&self, query: &ListQuery, token: Option<&str>) -> Result<Paginated<Event>> {
        self.api.get(EVENTS_PATH, &query.to_pairs(), token).await
    }

    pub async fn list_programs(&self, query: &ListQuery, token: Option<&str>) -> Result<Paginated<Program>> {
        self.api.get(PROGRAMS_PATH, &query.to_pairs(), token).await
    }

    pub async fn list_competitions(&self, query: &ListQuery, token: Option<&str>) -> Result<Paginated<Competition>> {
        self.api.get(COMPETITIONS_PATH, &query.to_pairs(), token).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let listing: CategoryListing = self.api.get(CATEGORIES_PATH, &[], None).await?;
        Ok(listing.into_vec())
    }

    pub async fn get_event(&self, id: i64, token: Option<&str>) -> Result<Event> {
        not_found_as(self.api.get(&format!("{}{}/", EVENTS_PATH, id), &[], token).await, "event", id)
    }

    pub async fn get_program(&self, id: i64, token: Option<&str>) -> Result<Program> {
        not_found_as(self.api.get(&format!("{}{}/", PROGRAMS_PATH, id), &[], token).await, "program", id)
    }

    pub async fn get_competition(&self, id: i64, token: Option<&str>) -> Result<Competition> {
        not_found_as(
            self.api.get(&format!("{}{}/", COMPETITIONS_PATH, id), &[], token).await,
            "competition",
            id,
        )
    }

    /// Fetch all three listings concurrently; any failure fails the whole load
    pub async fn fetch_all(&self, query: &ListQuery, token: Option<&str>) -> Result<ResourceBundle> {
        debug!(page = query.page, categories = ?query.categories, "Fetching all resource kinds");

        let (events, programs, competitions) = futures::try_join!(
            self.list_events(query, token),
            self.list_programs(query, token),
            self.list_competitions(query, token),
        )?;

        log_fetch_summary(
            events.results.len(),
            programs.results.len(),
            competitions.results.len(),
            &query.categories,
        );

        Ok(ResourceBundle {
            events,
            programs,
            competitions,
        })
    }
}

fn not_found_as<T>(result: Result<T>, kind: &str, id: i64) -> Result<T> {
    match result {
        Err(OrbitViewError::Api { status: 404, .. }) => {
            Err(OrbitViewError::NotFound(format!("{} {}", kind, id)))
        }
        other => other,
    }
}
