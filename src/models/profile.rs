//! Profile and career timeline models

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::helpers::parse_date;
use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub proficiency: u32,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub timeline_entries: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub skills: u32,
    #[serde(default)]
    pub achievements: u32,
    /// Percentage, 0 to 100
    #[serde(default)]
    pub profile_completion: u32,
}

/// Body of `/api/profiles/me/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub profile: Profile,
    #[serde(default)]
    pub timeline_entries: Vec<TimelineEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
    #[serde(default)]
    pub skills: Vec<SkillSummary>,
    #[serde(default)]
    pub achievements: Vec<AchievementSummary>,
    #[serde(default)]
    pub stats: ProfileStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimelineEntryType {
    Work,
    Education,
    Volunteer,
    Internship,
    Certification,
}

impl TimelineEntryType {
    pub const ALL: [TimelineEntryType; 5] = [
        TimelineEntryType::Work,
        TimelineEntryType::Education,
        TimelineEntryType::Volunteer,
        TimelineEntryType::Internship,
        TimelineEntryType::Certification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimelineEntryType::Work => "Work Experience",
            TimelineEntryType::Education => "Education",
            TimelineEntryType::Volunteer => "Volunteer Work",
            TimelineEntryType::Internship => "Internship",
            TimelineEntryType::Certification => "Certification",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            TimelineEntryType::Work => "WORK",
            TimelineEntryType::Education => "EDUCATION",
            TimelineEntryType::Volunteer => "VOLUNTEER",
            TimelineEntryType::Internship => "INTERNSHIP",
            TimelineEntryType::Certification => "CERTIFICATION",
        }
    }
}

impl fmt::Display for TimelineEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimelineEntryType {
    type Err = OrbitViewError;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = value.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == wanted)
            .ok_or_else(|| {
                OrbitViewError::InvalidInput(format!(
                    "Unknown timeline entry type: {} (expected one of work, education, volunteer, internship, certification)",
                    value
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Create/update payload for a timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDraft {
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for TimelineDraft {
    fn default() -> Self {
        Self {
            entry_type: TimelineEntryType::Work,
            title: String::new(),
            organization: String::new(),
            description: String::new(),
            location: None,
            start_date: String::new(),
            end_date: None,
            is_current: false,
            role: None,
            department: None,
            degree: None,
            field_of_study: None,
            grade: None,
            highlights: Vec::new(),
            url: None,
        }
    }
}

impl From<&TimelineEntry> for TimelineDraft {
    /// Dates are cut down to `YYYY-MM-DD` the way the edit form expects them
    fn from(entry: &TimelineEntry) -> Self {
        let date_part = |value: &str| value.split('T').next().unwrap_or(value).to_string();
        Self {
            entry_type: entry.entry_type,
            title: entry.title.clone(),
            organization: entry.organization.clone(),
            description: entry.description.clone(),
            location: Some(entry.location.clone()).filter(|l| !l.is_empty()),
            start_date: date_part(&entry.start_date),
            end_date: entry.end_date.as_deref().map(date_part),
            is_current: entry.is_current,
            role: entry.role.clone(),
            department: entry.department.clone(),
            degree: entry.degree.clone(),
            field_of_study: entry.field_of_study.clone(),
            grade: entry.grade.clone(),
            highlights: entry.highlights.clone(),
            url: entry.url.clone(),
        }
    }
}

impl TimelineDraft {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("Title", &self.title),
            ("Organization", &self.organization),
            ("Description", &self.description),
            ("Start date", &self.start_date),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(OrbitViewError::InvalidInput(format!("{} is required", label)));
            }
        }

        let start = parse_date(&self.start_date).ok_or_else(|| {
            OrbitViewError::InvalidInput(format!("Invalid start date: {}", self.start_date))
        })?;

        if let Some(end_raw) = self.end_date.as_deref().filter(|d| !d.is_empty()) {
            let end = parse_date(end_raw)
                .ok_or_else(|| OrbitViewError::InvalidInput(format!("Invalid end date: {}", end_raw)))?;
            if end < start {
                return Err(OrbitViewError::InvalidInput(
                    "End date cannot be before start date".to_string(),
                ));
            }
        }

        if let Some(link) = self.url.as_deref().filter(|u| !u.is_empty()) {
            url::Url::parse(link)
                .map_err(|_| OrbitViewError::InvalidInput(format!("Invalid URL: {}", link)))?;
        }

        Ok(())
    }

    /// Empty optional strings are sent as absent fields
    pub fn normalized(mut self) -> Self {
        let clear = |value: &mut Option<String>| {
            if value.as_deref().map(str::trim).map_or(false, str::is_empty) {
                *value = None;
            }
        };
        clear(&mut self.location);
        clear(&mut self.end_date);
        clear(&mut self.role);
        clear(&mut self.department);
        clear(&mut self.degree);
        clear(&mut self.field_of_study);
        clear(&mut self.grade);
        clear(&mut self.url);
        if self.is_current {
            self.end_date = None;
        }
        self.highlights.retain(|h| !h.trim().is_empty());
        self
    }
}
