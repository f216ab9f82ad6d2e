//! # Content records served by the backend
//!
//! One struct per REST collection, mirroring the backend's serializers. All of them
//! are flat records: descriptive fields, an image URL, and one or two dates. They
//! derive `Serialize` as well as `Deserialize` because the admin forms prefill by
//! serialising a record back into JSON.
//!
//! ## Types
//!
//! | Struct | Collection | Notes |
//! |--------|-----------|-------|
//! | [`Event`] | `events` | `event_type` splits the list into upcoming and past |
//! | [`Project`] | `projects` | `technologies` is a JSON list of tag strings |
//! | [`Article`] | `articles` | `external_link` optional |
//! | [`Service`] | `services` | `features` is a JSON list of bullet strings |
//! | [`Feedback`] | `feedback` | `approved` gates public visibility |
//! | [`GalleryItem`] | `gallery` | keyed by `filename` plus an `upload_date` |
//! | [`Contact`] | `contacts` | inquiry submitted from the public contact form |
//!
//! [`FeedbackSubmission`] and [`ContactSubmission`] are the write-side payloads for
//! the two public forms. They carry no `id`; the backend assigns one.
//!
//! ## Identifiers
//!
//! The backend serialises `id` as a JSON number, but older fixtures and the
//! built-in defaults use strings. [`deserialize_id`] accepts both and normalises
//! to `String`, which is also the form route parameters want.

use serde::{Deserialize, Deserializer, Serialize};

/// Accept an id as either a JSON number or a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// Whether an event is still ahead or already happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Upcoming,
    Past,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Upcoming => "upcoming",
            EventKind::Past => "past",
        }
    }
}

/// A workshop, webinar, or conference appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// ISO date, e.g. `"2025-02-15"`.
    pub date: String,
    /// Free-form time label, e.g. `"09:00 AM"`.
    pub time: String,
    pub location: String,
    #[serde(rename = "event_type")]
    pub kind: EventKind,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A delivered client project shown in the portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub completion_date: String,
    pub client: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A published insight piece, usually linking out to the full text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: String,
    pub publish_date: String,
    /// Display label such as `"8 min read"`.
    pub read_time: String,
    pub category: String,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A service offering on the services page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A client testimonial. Only records with `approved == true` are shown publicly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub review: String,
    pub approved: bool,
    #[serde(default)]
    pub created_at: String,
}

/// An image in the public gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub filename: String,
    pub image: String,
    pub category: String,
    pub upload_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
}

/// An inquiry from the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub country: String,
    #[serde(default)]
    pub job_title: String,
    pub job_details: String,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for the public feedback form. Always submitted unapproved; an admin
/// flips the flag after review.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub rating: u8,
    pub review: String,
    pub approved: bool,
}

impl FeedbackSubmission {
    pub fn new(name: String, email: String, company: String, rating: u8, review: String) -> Self {
        Self {
            name,
            email,
            company,
            rating,
            review,
            approved: false,
        }
    }
}

/// Payload for the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
    pub job_title: String,
    pub job_details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_or_string() {
        let from_number: Service = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "AI Consulting",
            "description": "Strategy work.",
            "image": "https://example.com/a.jpg",
        }))
        .unwrap();
        assert_eq!(from_number.id, "7");
        assert!(from_number.features.is_empty());

        let from_string: Service = serde_json::from_value(serde_json::json!({
            "id": "7",
            "name": "AI Consulting",
            "description": "Strategy work.",
            "image": "https://example.com/a.jpg",
            "features": ["Roadmaps"],
        }))
        .unwrap();
        assert_eq!(from_string.id, "7");
        assert_eq!(from_string.features, vec!["Roadmaps".to_string()]);
    }

    #[test]
    fn test_event_kind_wire_format() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Summit",
            "description": "All about AI.",
            "image": "https://example.com/e.jpg",
            "date": "2025-02-15",
            "time": "09:00 AM",
            "location": "San Francisco",
            "event_type": "past",
        }))
        .unwrap();
        assert_eq!(event.kind, EventKind::Past);
        assert!(event.max_attendees.is_none());
        assert!(event.registration_link.is_none());

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["event_type"], "past");
    }

    #[test]
    fn test_feedback_submission_starts_unapproved() {
        let submission = FeedbackSubmission::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            String::new(),
            5,
            "Great work".to_string(),
        );
        assert!(!submission.approved);

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["approved"], false);
        assert_eq!(json["rating"], 5);
    }
}
