//! Unified card view of a resource

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use crate::models::resource::{Category, Competition, Event, Program};
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::helpers::format_date_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Event,
    Competition,
    Program,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Event => "Event",
            ResourceKind::Competition => "Competition",
            ResourceKind::Program => "Program",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Event => f.write_str("event"),
            ResourceKind::Competition => f.write_str("competition"),
            ResourceKind::Program => f.write_str("program"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = OrbitViewError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "event" | "events" => Ok(ResourceKind::Event),
            "competition" | "competitions" => Ok(ResourceKind::Competition),
            "program" | "programs" => Ok(ResourceKind::Program),
            other => Err(OrbitViewError::InvalidInput(format!(
                "Unknown resource kind: {} (expected event, competition or program)",
                other
            ))),
        }
    }
}

/// Everything a resource card shows, whatever the underlying kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceItem {
    pub kind: ResourceKind,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub difficulty: Option<String>,
    pub organizer: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub categories: Vec<Category>,
    /// Free-form labels: category titles, plus skill tags for competitions
    pub tags: Vec<String>,
}

impl ResourceItem {
    /// Key unique within a merged list, e.g. `event-12`
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind, self.id)
    }

    /// Date range for dated resources, duration for programs
    pub fn date_display(&self) -> Option<String> {
        match (&self.start_date, &self.duration) {
            (Some(start), _) if !start.is_empty() => {
                Some(format_date_range(start, self.end_date.as_deref()))
            }
            (_, Some(duration)) if !duration.is_empty() => Some(duration.clone()),
            _ => None,
        }
    }

    pub fn has_category(&self, id: i64) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            kind: ResourceKind::Event,
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: Some(event.start_time.clone()),
            end_date: event.end_time.clone(),
            duration: None,
            location: event.location.as_deref().and_then(non_empty),
            difficulty: None,
            organizer: Some(event.host.name.clone()),
            url: non_empty(&event.url),
            image_url: event.cover_image.as_deref().and_then(non_empty),
            categories: event.category.clone(),
            tags: category_titles(&event.category),
        }
    }

    pub fn from_program(program: &Program) -> Self {
        Self {
            kind: ResourceKind::Program,
            id: program.id,
            title: program.title.clone(),
            description: program.description.clone(),
            start_date: None,
            end_date: None,
            duration: non_empty(&program.duration_description),
            location: None,
            difficulty: None,
            organizer: Some(program.host.name.clone()),
            url: non_empty(&program.url),
            image_url: program.cover_image.as_deref().and_then(non_empty),
            categories: program.category.clone(),
            tags: category_titles(&program.category),
        }
    }

    pub fn from_competition(competition: &Competition) -> Self {
        let mut tags: Vec<String> = competition.tags.iter().map(|t| t.name.clone()).collect();
        tags.extend(category_titles(&competition.category));

        Self {
            kind: ResourceKind::Competition,
            id: competition.id,
            title: competition.title.clone(),
            description: competition.description.clone(),
            start_date: Some(competition.start_date.clone()),
            end_date: competition.end_date.clone(),
            duration: None,
            location: None,
            difficulty: non_empty(&competition.difficulty_level),
            organizer: competition.organizer_name(),
            url: non_empty(&competition.url),
            image_url: competition.cover_image.as_deref().and_then(non_empty),
            categories: competition.category.clone(),
            tags,
        }
    }
}

impl From<&Event> for ResourceItem {
    fn from(event: &Event) -> Self {
        Self::from_event(event)
    }
}

impl From<&Program> for ResourceItem {
    fn from(program: &Program) -> Self {
        Self::from_program(program)
    }
}

impl From<&Competition> for ResourceItem {
    fn from(competition: &Competition) -> Self {
        Self::from_competition(competition)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn category_titles(categories: &[Category]) -> Vec<String> {
    categories.iter().map(|c| c.title.clone()).collect()
}
