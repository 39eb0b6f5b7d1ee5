//! Profile and timeline handlers

use tracing::debug;
use crate::handlers::render::{render_profile, render_timeline, render_timeline_entry};
use crate::handlers::{expire_on_unauthorized, require_session};
use crate::middleware::auth as routes;
use crate::models::profile::{TimelineDraft, TimelineEntryType};
use crate::services::ServiceFactory;
use crate::state::SessionCache;
use crate::utils::errors::Result;

/// Timeline form fields; unset fields keep the draft's current value
#[derive(Debug, Clone, Default)]
pub struct TimelineFields {
    pub entry_type: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub grade: Option<String>,
    /// Replaces the highlight list when non-empty
    pub highlights: Vec<String>,
    pub url: Option<String>,
}

impl TimelineFields {
    pub fn apply_to(self, mut draft: TimelineDraft) -> Result<TimelineDraft> {
        if let Some(kind) = self.entry_type {
            draft.entry_type = kind.parse::<TimelineEntryType>()?;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(organization) = self.organization {
            draft.organization = organization;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(is_current) = self.is_current {
            draft.is_current = is_current;
        }
        if !self.highlights.is_empty() {
            draft.highlights = self.highlights;
        }

        let overrides = [
            (self.location, &mut draft.location),
            (self.end_date, &mut draft.end_date),
            (self.role, &mut draft.role),
            (self.department, &mut draft.department),
            (self.degree, &mut draft.degree),
            (self.field_of_study, &mut draft.field_of_study),
            (self.grade, &mut draft.grade),
            (self.url, &mut draft.url),
        ];
        for (value, slot) in overrides {
            if value.is_some() {
                *slot = value;
            }
        }

        Ok(draft)
    }
}

pub async fn handle_profile(services: &ServiceFactory, session: &mut SessionCache) -> Result<String> {
    let token = require_session(session, routes::PROFILE)?.to_string();

    let data = match services.profile_service.me(&token).await {
        Ok(data) => data,
        Err(e) => return Err(expire_on_unauthorized(session, e)),
    };

    Ok(render_profile(session.user(), &data))
}

pub async fn handle_timeline_list(services: &ServiceFactory, session: &mut SessionCache) -> Result<String> {
    let token = require_session(session, routes::TIMELINE)?.to_string();

    match services.profile_service.list_timeline(&token).await {
        Ok(entries) => Ok(render_timeline(&entries)),
        Err(e) => Err(expire_on_unauthorized(session, e)),
    }
}

pub async fn handle_timeline_show(services: &ServiceFactory, session: &mut SessionCache, id: i64) -> Result<String> {
    let token = require_session(session, routes::TIMELINE)?.to_string();

    match services.profile_service.get_timeline_entry(&token, id).await {
        Ok(entry) => Ok(render_timeline_entry(&entry)),
        Err(e) => Err(expire_on_unauthorized(session, e)),
    }
}

pub async fn handle_timeline_add(
    services: &ServiceFactory,
    session: &mut SessionCache,
    fields: TimelineFields,
) -> Result<String> {
    let token = require_session(session, routes::TIMELINE)?.to_string();
    let draft = fields.apply_to(TimelineDraft::default())?;
    debug!(title = %draft.title, "Adding timeline entry");

    match services.profile_service.create_timeline_entry(&token, draft).await {
        Ok(entry) => Ok(format!(
            "Timeline entry created successfully.\n\n{}",
            render_timeline_entry(&entry)
        )),
        Err(e) => Err(expire_on_unauthorized(session, e)),
    }
}

/// Load the entry, overlay the given fields and save it back
pub async fn handle_timeline_edit(
    services: &ServiceFactory,
    session: &mut SessionCache,
    id: i64,
    fields: TimelineFields,
) -> Result<String> {
    let token = require_session(session, routes::TIMELINE)?.to_string();
    let profile_service = &services.profile_service;

    let result = async {
        let existing = profile_service.get_timeline_entry(&token, id).await?;
        let draft = fields.apply_to(TimelineDraft::from(&existing))?;
        profile_service.update_timeline_entry(&token, id, draft).await
    }
    .await;

    match result {
        Ok(entry) => Ok(format!(
            "Timeline entry updated successfully.\n\n{}",
            render_timeline_entry(&entry)
        )),
        Err(e) => Err(expire_on_unauthorized(session, e)),
    }
}

pub async fn handle_timeline_delete(services: &ServiceFactory, session: &mut SessionCache, id: i64) -> Result<String> {
    let token = require_session(session, routes::TIMELINE)?.to_string();

    match services.profile_service.delete_timeline_entry(&token, id).await {
        Ok(()) => Ok("Timeline entry deleted successfully.".to_string()),
        Err(e) => Err(expire_on_unauthorized(session, e)),
    }
}
