//! Resource models
//!
//! Records served by `/api/resources/`: events, programs, competitions and
//! the categories, tags and hosts they reference.

use serde::{Deserialize, Serialize};
use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub host: Host,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub host: Host,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_description: String,
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// A competition. The backend names the organizer either through a nested
/// `host` or a plain `organizer` field depending on the serializer version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub host: Option<Host>,
    #[serde(default)]
    pub organizer: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty_level: String,
    #[serde(default)]
    pub category: Vec<Category>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub past: Option<bool>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Competition {
    /// Display name of whoever runs the competition
    pub fn organizer_name(&self) -> Option<String> {
        if let Some(host) = &self.host {
            return Some(host.name.clone());
        }
        match &self.organizer {
            Some(serde_json::Value::String(name)) => Some(name.clone()),
            Some(serde_json::Value::Object(fields)) => fields
                .get("name")
                .and_then(|name| name.as_str())
                .map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserialization() {
        let body = json!({
            "id": 7,
            "title": "Tech Innovation Summit",
            "description": "Two days of talks",
            "host": {"id": 1, "name": "TechConnect", "slogan": null, "bio": "", "cover_image": ""},
            "url": "https://example.com/summit",
            "location": "San Francisco, CA",
            "start_time": "2025-06-15T09:00:00Z",
            "end_time": "2025-06-16T18:00:00Z",
            "category": [{"id": 2, "title": "Conferences"}],
            "cover_image": null
        });

        let event: Event = serde_json::from_value(body).unwrap();
        assert_eq!(event.host.name, "TechConnect");
        assert_eq!(event.category[0].title, "Conferences");
        assert!(event.cover_image.is_none());
    }

    #[test]
    fn test_event_with_null_fields() {
        let body = json!({
            "id": 8,
            "title": "Open Mic",
            "description": null,
            "host": {"id": 1, "name": "TechConnect", "slogan": null, "bio": null},
            "url": "https://example.com/open-mic",
            "location": null,
            "start_time": "2025-06-15T09:00:00Z",
            "end_time": null,
            "category": []
        });

        let event: Event = serde_json::from_value(body).unwrap();
        assert!(event.location.is_none());
        assert!(event.description.is_empty());
        assert!(event.host.bio.is_empty());
    }

    #[test]
    fn test_competition_organizer_variants() {
        let with_host: Competition = serde_json::from_value(json!({
            "id": 1, "title": "Hack", "start_date": "2025-08-10",
            "host": {"id": 3, "name": "EcoTech Alliance"}
        }))
        .unwrap();
        assert_eq!(with_host.organizer_name().as_deref(), Some("EcoTech Alliance"));

        let with_name: Competition = serde_json::from_value(json!({
            "id": 2, "title": "Quiz", "start_date": "2025-08-10", "organizer": "Math Club"
        }))
        .unwrap();
        assert_eq!(with_name.organizer_name().as_deref(), Some("Math Club"));

        let with_id: Competition = serde_json::from_value(json!({
            "id": 3, "title": "Cup", "start_date": "2025-08-10", "organizer": 12
        }))
        .unwrap();
        assert_eq!(with_id.organizer_name(), None);
    }
}
