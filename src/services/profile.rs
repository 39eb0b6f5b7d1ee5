//! Profile service implementation
//!
//! Reads the signed-in user's profile and manages career timeline entries.
//! Every call requires an access token.

use tracing::{debug, info};
use crate::models::profile::{ProfileData, TimelineDraft, TimelineEntry};
use crate::services::api::ApiClient;
use crate::utils::errors::{OrbitViewError, Result};

pub const PROFILE_PATH: &str = "/api/profiles/me/";
pub const TIMELINE_PATH: &str = "/api/profiles/timeline/";

/// Profile service for the signed-in user
#[derive(Clone, Debug)]
pub struct ProfileService {
    api: ApiClient,
}

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn me(&self, token: &str) -> Result<ProfileData> {
        self.api.get(PROFILE_PATH, &[], Some(token)).await
    }

    /// Timeline entries as embedded in the profile document
    pub async fn list_timeline(&self, token: &str) -> Result<Vec<TimelineEntry>> {
        Ok(self.me(token).await?.timeline_entries)
    }

    pub async fn get_timeline_entry(&self, token: &str, id: i64) -> Result<TimelineEntry> {
        match self.api.get(&entry_path(id), &[], Some(token)).await {
            Err(OrbitViewError::Api { status: 404, .. }) => {
                Err(OrbitViewError::NotFound(format!("timeline entry {}", id)))
            }
            other => other,
        }
    }

    pub async fn create_timeline_entry(&self, token: &str, draft: TimelineDraft) -> Result<TimelineEntry> {
        let draft = draft.normalized();
        draft.validate()?;
        debug!(title = %draft.title, "Creating timeline entry");

        let entry: TimelineEntry = self.api.post(TIMELINE_PATH, &draft, Some(token)).await?;
        info!(entry_id = entry.id, "Timeline entry created");
        Ok(entry)
    }

    pub async fn update_timeline_entry(&self, token: &str, id: i64, draft: TimelineDraft) -> Result<TimelineEntry> {
        let draft = draft.normalized();
        draft.validate()?;
        debug!(entry_id = id, "Updating timeline entry");

        let entry: TimelineEntry = self.api.put(&entry_path(id), &draft, Some(token)).await?;
        info!(entry_id = entry.id, "Timeline entry updated");
        Ok(entry)
    }

    pub async fn delete_timeline_entry(&self, token: &str, id: i64) -> Result<()> {
        match self.api.delete(&entry_path(id), Some(token)).await {
            Ok(()) => {
                info!(entry_id = id, "Timeline entry deleted");
                Ok(())
            }
            Err(OrbitViewError::Api { status: 404, .. }) => {
                Err(OrbitViewError::NotFound(format!("timeline entry {}", id)))
            }
            Err(e) => Err(e),
        }
    }
}

fn entry_path(id: i64) -> String {
    format!("{}{}/", TIMELINE_PATH, id)
}
