//! Test data helpers for building backend response bodies

use serde_json::{json, Value};

pub const GOOD_TOKEN: &str = "good-token";
pub const BAD_TOKEN: &str = "expired-token";

pub fn category_json(id: i64, title: &str) -> Value {
    json!({ "id": id, "title": title })
}

pub fn host_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "slogan": null, "bio": "", "cover_image": null })
}

pub fn event_json(id: i64, title: &str, categories: &[(i64, &str)]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "host": host_json(1, "TechConnect"),
        "url": format!("https://example.com/events/{}", id),
        "location": "San Francisco, CA",
        "start_time": "2025-06-15T09:00:00Z",
        "end_time": "2025-06-16T18:00:00Z",
        "category": categories.iter().map(|(id, t)| category_json(*id, t)).collect::<Vec<_>>(),
        "cover_image": null
    })
}

pub fn program_json(id: i64, title: &str, categories: &[(i64, &str)]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "host": host_json(2, "FutureLeaders"),
        "url": format!("https://example.com/programs/{}", id),
        "duration_description": "12 weeks",
        "category": categories.iter().map(|(id, t)| category_json(*id, t)).collect::<Vec<_>>(),
        "cover_image": null
    })
}

pub fn competition_json(id: i64, title: &str, categories: &[(i64, &str)]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "organizer": { "id": 3, "name": "EcoTech Alliance" },
        "url": format!("https://example.com/competitions/{}", id),
        "tags": [{ "id": 1, "name": "sustainability" }],
        "difficulty_level": "Advanced",
        "category": categories.iter().map(|(id, t)| category_json(*id, t)).collect::<Vec<_>>(),
        "start_date": "2025-08-10T00:00:00Z",
        "end_date": "2025-08-12T00:00:00Z",
        "past": false,
        "cover_image": null
    })
}

/// Page-number paginated body with no further pages
pub fn paginated_json(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

pub fn user_json(id: i64, username: &str, first_name: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "first_name": first_name,
        "last_name": "Lovelace",
        "bio": null,
        "website": null,
        "profile_image": null
    })
}

pub fn timeline_entry_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "type": "WORK",
        "title": title,
        "organization": "Acme",
        "description": "Built the public API",
        "location": "Remote",
        "start_date": "2022-03-01",
        "end_date": null,
        "is_current": true,
        "role": "Backend",
        "department": null,
        "degree": null,
        "field_of_study": null,
        "grade": null,
        "highlights": ["Cut p99 latency in half"],
        "url": null
    })
}

pub fn profile_json(timeline: Vec<Value>) -> Value {
    let entries = timeline.len();
    json!({
        "profile": {
            "id": 1,
            "user": 1,
            "bio": "Curious engineer",
            "location": "London",
            "website": "",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        },
        "timeline_entries": timeline,
        "projects": [],
        "skills": [],
        "achievements": [],
        "stats": {
            "timeline_entries": entries,
            "projects": 0,
            "skills": 0,
            "achievements": 0,
            "profile_completion": 40
        }
    })
}
