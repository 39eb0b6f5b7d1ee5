//! Helper functions and utilities
//!
//! This module contains common formatting and validation helpers used by the
//! page renderers and request models.

use std::sync::OnceLock;
use chrono::{DateTime, NaiveDate};
use regex::Regex;

/// Parse a backend date, accepting RFC 3339 timestamps or plain `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a date for display (`May 22, 2025`), falling back to the raw input
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Format a date range, collapsing it when both ends are the same day
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) if !end.is_empty() && parse_date(end) != parse_date(start) => {
            format!("{} - {}", format_date(start), format_date(end))
        }
        _ => format_date(start),
    }
}

/// Format an optional date as `Jan 2024`; a missing date means the entry is ongoing
pub fn format_month_year(value: Option<&str>) -> String {
    match value {
        None => "Present".to_string(),
        Some(raw) if raw.is_empty() => "Present".to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => date.format("%b %Y").to_string(),
            None => raw.to_string(),
        },
    }
}

/// Truncate text to a maximum number of characters, appending an ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_length).collect();
        format!("{}...", head.trim_end())
    }
}

/// Initials from the first two words of a name
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
        .is_match(email)
}

/// Create a pagination info string
pub fn create_pagination_info(current_page: u32, page_size: u32, total_items: u64) -> String {
    let total_pages = if page_size == 0 {
        1
    } else {
        ((total_items + page_size as u64 - 1) / page_size as u64).max(1)
    };

    if total_pages <= 1 {
        format!("Total: {}", total_items)
    } else {
        format!("Page {} of {} (Total: {})", current_page, total_pages, total_items)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
