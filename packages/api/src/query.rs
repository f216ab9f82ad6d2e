//! Client-side list shaping: search, category chips, status filtering, ordering.
//!
//! The backend is treated as a dumb record store; every screen fetches the whole
//! collection and narrows it locally so typing in a search box never issues a
//! request.

use crate::collections::Collection;
use crate::models::{Event, EventKind, Feedback};

/// Sentinel category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Case-insensitive substring search over each record's search text. An empty or
/// whitespace-only term returns the list unchanged.
pub fn search<C: Collection>(items: &[C], term: &str) -> Vec<C> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Keep records in the given category. [`ALL_CATEGORIES`] keeps everything.
pub fn with_category<C: Collection>(items: &[C], category: &str) -> Vec<C> {
    if category == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category() == Some(category))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order, with [`ALL_CATEGORIES`] prepended.
pub fn categories<C: Collection>(items: &[C]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if let Some(category) = item.category() {
            if !out.iter().any(|c| c == category) {
                out.push(category.to_string());
            }
        }
    }
    out
}

/// Order newest first by each record's sort key. The keys are ISO dates, so
/// lexicographic order is chronological order. The sort is stable; records with
/// equal keys keep their fetched order.
pub fn newest_first<C: Collection>(items: &mut [C]) {
    items.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
}

/// Moderation filter on the admin feedback screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Approved,
    Pending,
}

impl StatusFilter {
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Approved => "approved",
            StatusFilter::Pending => "pending",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "approved" => StatusFilter::Approved,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }
}

/// Keep feedback records matching the moderation status.
pub fn with_status(items: &[Feedback], status: StatusFilter) -> Vec<Feedback> {
    items
        .iter()
        .filter(|f| match status {
            StatusFilter::All => true,
            StatusFilter::Approved => f.approved,
            StatusFilter::Pending => !f.approved,
        })
        .cloned()
        .collect()
}

/// Events of one kind, for the upcoming/past tabs.
pub fn of_kind(items: &[Event], kind: EventKind) -> Vec<Event> {
    items.iter().filter(|e| e.kind == kind).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_empty_search_returns_everything() {
        let projects = defaults::projects();
        assert_eq!(search(&projects, "").len(), projects.len());
        assert_eq!(search(&projects, "   ").len(), projects.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let projects = defaults::projects();
        let hits = search(&projects, "FRAUD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Financial Fraud Detection System");
    }

    #[test]
    fn test_search_misses_yield_empty() {
        let projects = defaults::projects();
        assert!(search(&projects, "blockchain").is_empty());
    }

    #[test]
    fn test_all_category_returns_everything() {
        let projects = defaults::projects();
        assert_eq!(with_category(&projects, ALL_CATEGORIES).len(), projects.len());
    }

    #[test]
    fn test_category_filter() {
        let projects = defaults::projects();
        let finance = with_category(&projects, "Finance");
        assert_eq!(finance.len(), 1);
        assert_eq!(finance[0].category, "Finance");
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let gallery = defaults::gallery();
        let cats = categories(&gallery);
        assert_eq!(cats[0], ALL_CATEGORIES);
        assert_eq!(
            cats[1..],
            [
                "Events".to_string(),
                "Team".to_string(),
                "Office".to_string(),
                "Meetings".to_string(),
                "Products".to_string(),
                "Awards".to_string(),
                "Infrastructure".to_string(),
            ]
        );
    }

    #[test]
    fn test_newest_first_orders_by_date() {
        let mut articles = defaults::articles();
        articles.reverse();
        newest_first(&mut articles);
        assert_eq!(articles[0].publish_date, "2024-12-01");
        assert_eq!(articles.last().unwrap().publish_date, "2024-11-18");
    }

    #[test]
    fn test_status_filter() {
        let mut feedback = defaults::feedback();
        feedback[0].approved = false;

        assert_eq!(with_status(&feedback, StatusFilter::All).len(), 4);
        assert_eq!(with_status(&feedback, StatusFilter::Approved).len(), 3);
        assert_eq!(with_status(&feedback, StatusFilter::Pending).len(), 1);
    }

    #[test]
    fn test_status_filter_value_roundtrip() {
        for status in [StatusFilter::All, StatusFilter::Approved, StatusFilter::Pending] {
            assert_eq!(StatusFilter::from_value(status.value()), status);
        }
        assert_eq!(StatusFilter::from_value("garbage"), StatusFilter::All);
    }

    #[test]
    fn test_of_kind_splits_events() {
        let events = defaults::events();
        assert_eq!(of_kind(&events, EventKind::Upcoming).len(), 3);
        assert_eq!(of_kind(&events, EventKind::Past).len(), 3);
    }
}
