/// Presentation of a post as a carousel card
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::post::Post;

/// Category label for posts without tags
pub const DEFAULT_TAG: &str = "Insight";

/// Shown in place of a date that cannot be read
pub const INVALID_DATE: &str = "INVALID DATE";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Call to action on a card, picked from the post's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionLabel {
    Listen,
    Watch,
    ReadMore,
}

impl ActionLabel {
    /// Any tag mentioning a podcast wins over one mentioning a video
    pub fn for_tags(tags: &[String]) -> Self {
        let mentions = |needle: &str| tags.iter().any(|t| t.to_lowercase().contains(needle));
        if mentions("podcast") {
            ActionLabel::Listen
        } else if mentions("video") {
            ActionLabel::Watch
        } else {
            ActionLabel::ReadMore
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ActionLabel::Listen => "Listen",
            ActionLabel::Watch => "Watch",
            ActionLabel::ReadMore => "Read More",
        }
    }
}

/// Display-ready fields of one card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub slug: String,
    pub image: String,
    pub primary_tag: String,
    pub action: ActionLabel,
    pub date_label: String,
}

impl Card {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            image: post.image.clone(),
            primary_tag: primary_tag(&post.tags).to_string(),
            action: ActionLabel::for_tags(&post.tags),
            date_label: format_date(&post.date),
        }
    }
}

pub fn primary_tag(tags: &[String]) -> &str {
    tags.first().map_or(DEFAULT_TAG, String::as_str)
}

/// `"2024-03-05"` becomes `"MARCH 5, 2024"`.
///
/// Unpadded ISO dates, RFC 3339 timestamps and written-out forms such as
/// `"March 5, 2024"` are read as well. A timestamp keeps the calendar day
/// of its own offset.
pub fn format_date(date: &str) -> String {
    match parse_date(date.trim()) {
        Some(day) => day.format("%B %-d, %Y").to_string().to_uppercase(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(date) {
        return Some(stamp.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        .map(|stamp| stamp.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
        })
}
