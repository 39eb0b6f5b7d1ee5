//! Text rendering for pages
//!
//! Cards, category chips, the profile overview and the career timeline are
//! rendered into plain strings so handlers stay testable.

use crate::discovery::{ResourceItem, ResourceKind};
use crate::models::profile::{ProfileData, TimelineEntry};
use crate::models::resource::Category;
use crate::models::user::User;
use crate::utils::helpers::{format_month_year, get_initials, normalize_whitespace, truncate_text};

/// Category badges shown on a card before collapsing into `+N`
pub const MAX_CARD_BADGES: usize = 3;
pub const CARD_DESCRIPTION_LENGTH: usize = 160;

pub fn render_card(item: &ResourceItem) -> String {
    let mut lines = vec![format!("[{}] {}", item.kind.label(), item.title)];

    if !item.categories.is_empty() {
        let mut badges: Vec<String> = item
            .categories
            .iter()
            .take(MAX_CARD_BADGES)
            .map(|c| c.title.clone())
            .collect();
        if item.categories.len() > MAX_CARD_BADGES {
            badges.push(format!("+{}", item.categories.len() - MAX_CARD_BADGES));
        }
        lines.push(format!("  {}", badges.join(" · ")));
    }

    let description = normalize_whitespace(&item.description);
    if !description.is_empty() {
        lines.push(format!("  {}", truncate_text(&description, CARD_DESCRIPTION_LENGTH)));
    }

    if let Some(when) = item.date_display() {
        let label = if item.kind == ResourceKind::Program { "Duration" } else { "When" };
        lines.push(format!("  {}: {}", label, when));
    }
    if let Some(location) = &item.location {
        lines.push(format!("  Where: {}", location));
    }
    if let Some(difficulty) = &item.difficulty {
        lines.push(format!("  Difficulty: {}", difficulty));
    }
    if let Some(organizer) = &item.organizer {
        lines.push(format!("  By {}", organizer));
    }
    if let Some(url) = &item.url {
        lines.push(format!("  {}", url));
    }

    lines.join("\n")
}

pub fn render_cards(items: &[ResourceItem]) -> String {
    if items.is_empty() {
        return "No resources found.".to_string();
    }
    items.iter().map(render_card).collect::<Vec<_>>().join("\n\n")
}

/// Category list with selected entries checked
pub fn render_categories(categories: &[Category], selected: &[i64]) -> String {
    if categories.is_empty() {
        return "No categories available.".to_string();
    }
    categories
        .iter()
        .map(|c| {
            let mark = if selected.contains(&c.id) { "x" } else { " " };
            format!("[{}] {:>3}  {}", mark, c.id, c.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Featured listing for the home page, grouped by kind
pub fn render_featured(kind: ResourceKind, items: &[ResourceItem], limit: usize) -> String {
    let heading = match kind {
        ResourceKind::Event => "Events",
        ResourceKind::Competition => "Competitions",
        ResourceKind::Program => "Programs",
    };
    let shown: Vec<ResourceItem> = items.iter().take(limit).cloned().collect();
    format!("== {} ==\n{}", heading, render_cards(&shown))
}

struct ProfileSection {
    title: &'static str,
    count: u32,
    command: &'static str,
    description: &'static str,
}

pub fn render_profile(user: Option<&User>, data: &ProfileData) -> String {
    let mut lines = Vec::new();

    if let Some(user) = user {
        let name = user.display_name();
        lines.push(format!("({}) {}", get_initials(&name), name));
        if !user.email.is_empty() {
            lines.push(format!("    {}", user.email));
        }
    }
    if !data.profile.bio.is_empty() {
        lines.push(format!("    {}", data.profile.bio));
    }
    if !data.profile.location.is_empty() {
        lines.push(format!("    {}", data.profile.location));
    }
    if !data.profile.website.is_empty() {
        lines.push(format!("    {}", data.profile.website));
    }

    let completion = data.stats.profile_completion.min(100);
    let filled = (completion / 5) as usize;
    lines.push(String::new());
    lines.push(format!(
        "Profile completion: [{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        completion
    ));
    lines.push(String::new());

    let sections = [
        ProfileSection {
            title: "Timeline",
            count: data.stats.timeline_entries,
            command: "orbitview timeline list",
            description: "Add your work experience and education history",
        },
        ProfileSection {
            title: "Projects",
            count: data.stats.projects,
            command: "",
            description: "Showcase your projects and contributions",
        },
        ProfileSection {
            title: "Skills",
            count: data.stats.skills,
            command: "",
            description: "List your skills and get them verified",
        },
        ProfileSection {
            title: "Achievements",
            count: data.stats.achievements,
            command: "",
            description: "Add your certifications and awards",
        },
    ];

    for section in sections {
        lines.push(format!("{:<13}{:>3}  {}", section.title, section.count, section.description));
        if !section.command.is_empty() {
            lines.push(format!("{:18}-> {}", "", section.command));
        }
    }

    lines.join("\n")
}

pub fn render_timeline_entry(entry: &TimelineEntry) -> String {
    let mut lines = vec![format!("#{} {} [{}]", entry.id, entry.title, entry.entry_type.label())];

    let mut place = entry.organization.clone();
    if !entry.location.is_empty() {
        place = format!("{} • {}", place, entry.location);
    }
    if !place.is_empty() {
        lines.push(format!("  {}", place));
    }

    let mut period = format!(
        "{} - {}",
        format_month_year(Some(&entry.start_date)),
        format_month_year(entry.end_date.as_deref())
    );
    if entry.is_current && entry.end_date.is_some() {
        period.push_str(" • Present");
    }
    lines.push(format!("  {}", period));

    if let Some(role) = entry.role.as_deref().filter(|r| !r.is_empty()) {
        lines.push(format!("  Role: {}", role));
    }
    if let Some(degree) = entry.degree.as_deref().filter(|d| !d.is_empty()) {
        match entry.field_of_study.as_deref().filter(|f| !f.is_empty()) {
            Some(field) => lines.push(format!("  {} in {}", degree, field)),
            None => lines.push(format!("  {}", degree)),
        }
    }
    if !entry.description.is_empty() {
        lines.push(format!("  {}", entry.description));
    }
    for highlight in &entry.highlights {
        lines.push(format!("  - {}", highlight));
    }
    if let Some(url) = entry.url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("  {}", url));
    }

    lines.join("\n")
}

pub fn render_timeline(entries: &[TimelineEntry]) -> String {
    if entries.is_empty() {
        return "No timeline entries yet. Add your first entry with `orbitview timeline add`.".to_string();
    }
    entries
        .iter()
        .map(render_timeline_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}
