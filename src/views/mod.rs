//! Derived views: pure, stateless transformations over collection snapshots.
//!
//! Every function here is deterministic and re-entrant; given the same input
//! sequence it always produces the same output sequence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Announcement, Category, Contact, Event, Posting, Priority};

/// How many of each collection feed into the recent-activity merge.
pub const RECENT_PER_COLLECTION: usize = 3;

/// Maximum length of the merged recent-activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Split events into (upcoming, past) relative to `today`, each sorted
/// ascending by date. An event dated `today` counts as upcoming. Ties at the
/// same date keep their original relative order.
pub fn partition_by_date(events: &[Event], today: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted.into_iter().partition(|e| e.date >= today)
}

/// Category selection for marketplace filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Retain postings whose title or description contains `term` as a
/// case-insensitive substring and whose category passes `filter`. An empty
/// term matches everything.
pub fn filter_postings(postings: &[Posting], term: &str, filter: CategoryFilter) -> Vec<Posting> {
    let term = term.to_lowercase();
    postings
        .iter()
        .filter(|p| {
            let matches_search = p.title.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term);
            matches_search && filter.matches(p.category)
        })
        .cloned()
        .collect()
}

/// Kind of record behind a recent-activity entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Announcement,
    Event,
    Posting,
}

/// One entry in the merged recent-activity feed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Merge the newest few items of each collection into a single feed, sorted
/// by creation timestamp descending and truncated to
/// [`RECENT_ACTIVITY_LIMIT`]. Collections are stored newest-first, so the
/// leading items of each slice are its most recent.
pub fn recent_activity(
    announcements: &[Announcement],
    events: &[Event],
    postings: &[Posting],
) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = Vec::new();

    feed.extend(
        announcements
            .iter()
            .take(RECENT_PER_COLLECTION)
            .map(|a| ActivityItem {
                kind: ActivityKind::Announcement,
                title: a.title.clone(),
                date: a.created_at,
            }),
    );
    feed.extend(events.iter().take(RECENT_PER_COLLECTION).map(|e| {
        ActivityItem {
            kind: ActivityKind::Event,
            title: e.title.clone(),
            date: e.created_at,
        }
    }));
    feed.extend(postings.iter().take(RECENT_PER_COLLECTION).map(|p| {
        ActivityItem {
            kind: ActivityKind::Posting,
            title: p.title.clone(),
            date: p.created_at,
        }
    }));

    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(RECENT_ACTIVITY_LIMIT);
    feed
}

/// Count announcements at the given priority.
pub fn count_by_priority(announcements: &[Announcement], priority: Priority) -> usize {
    announcements
        .iter()
        .filter(|a| a.priority == priority)
        .count()
}

/// Count events dated `today` or later.
pub fn count_upcoming(events: &[Event], today: NaiveDate) -> usize {
    events.iter().filter(|e| e.date >= today).count()
}

/// Tally of marketplace postings per category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    pub buy: usize,
    pub sell: usize,
    pub rent: usize,
}

/// Count postings per category, plus the overall total.
pub fn category_counts(postings: &[Posting]) -> CategoryCounts {
    let count = |category| {
        postings
            .iter()
            .filter(|p| p.category == category)
            .count()
    };
    CategoryCounts {
        all: postings.len(),
        buy: count(Category::Buy),
        sell: count(Category::Sell),
        rent: count(Category::Rent),
    }
}

/// Count contacts whose department equals `department`, case-insensitive.
pub fn count_by_department(contacts: &[Contact], department: &str) -> usize {
    contacts
        .iter()
        .filter(|c| c.department.eq_ignore_ascii_case(department))
        .count()
}
