//! The [`Collection`] trait maps each record type onto its REST collection, and the
//! generic CRUD verbs on [`Session`] that every screen shares.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use reqwest::Method;
use store::kv::KeyValueStore;

use crate::defaults;
use crate::error::ApiError;
use crate::models::{Article, Contact, Event, Feedback, GalleryItem, Project, Service};
use crate::query;
use crate::session::Session;

/// A record type served by one REST collection.
///
/// Implementations tie a model struct to its endpoint path and teach the generic
/// list screens how to sort, search, and label records of that type.
pub trait Collection: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Path segment under the API root, e.g. `"events"`.
    const PATH: &'static str;
    /// Human label used in alerts and confirm prompts.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Field the list is ordered by, newest first. Matches the backend's default
    /// ordering so a fetched list and a fallback list agree.
    fn sort_key(&self) -> &str;

    /// Text the search box matches against. Case folding happens in [`query::search`].
    fn search_text(&self) -> String;

    /// Category value for chip and select filtering, if this type has one.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Built-in dataset the public pages fall back to. Empty for admin-only types.
    fn fallback() -> Vec<Self> {
        Vec::new()
    }
}

impl Collection for Event {
    const PATH: &'static str = "events";
    const LABEL: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.date
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.location)
    }

    fn fallback() -> Vec<Self> {
        defaults::events()
    }
}

impl Collection for Project {
    const PATH: &'static str = "projects";
    const LABEL: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.completion_date
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.category, self.client
        )
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn fallback() -> Vec<Self> {
        defaults::projects()
    }
}

impl Collection for Article {
    const PATH: &'static str = "articles";
    const LABEL: &'static str = "Article";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.publish_date
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.author, self.category
        )
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn fallback() -> Vec<Self> {
        defaults::articles()
    }
}

impl Collection for Service {
    const PATH: &'static str = "services";
    const LABEL: &'static str = "Service";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.created_at
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }

    fn fallback() -> Vec<Self> {
        defaults::services()
    }
}

impl Collection for Feedback {
    const PATH: &'static str = "feedback";
    const LABEL: &'static str = "Feedback";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.created_at
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.company, self.review)
    }

    fn fallback() -> Vec<Self> {
        defaults::feedback()
    }
}

impl Collection for GalleryItem {
    const PATH: &'static str = "gallery";
    const LABEL: &'static str = "Image";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.upload_date
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.filename, self.description)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn fallback() -> Vec<Self> {
        defaults::gallery()
    }
}

impl Collection for Contact {
    const PATH: &'static str = "contacts";
    const LABEL: &'static str = "Contact inquiry";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.created_at
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.full_name, self.email, self.company, self.job_details
        )
    }
}

/// List endpoints answer either a bare array or a paginated envelope, depending
/// on the backend's pagination settings. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<C> {
    Plain(Vec<C>),
    Paged { results: Vec<C> },
}

impl<C> ListPayload<C> {
    fn into_items(self) -> Vec<C> {
        match self {
            ListPayload::Plain(items) => items,
            ListPayload::Paged { results } => results,
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Fetch every record in a collection, newest first.
    pub async fn fetch<C: Collection>(&self) -> Result<Vec<C>, ApiError> {
        let url = self.collection_url(C::PATH);
        let response = self.send(Method::GET, &url, None).await?;
        let payload: ListPayload<C> = response.json().await?;
        let mut items = payload.into_items();
        query::newest_first(&mut items);
        Ok(items)
    }

    /// Create a record. The backend assigns the id.
    pub async fn insert<C: Collection>(&self, record: &impl Serialize) -> Result<(), ApiError> {
        let body = to_body(record)?;
        let url = self.collection_url(C::PATH);
        self.send(Method::POST, &url, Some(&body)).await?;
        Ok(())
    }

    /// Replace a record wholesale.
    pub async fn update<C: Collection>(
        &self,
        id: &str,
        record: &impl Serialize,
    ) -> Result<(), ApiError> {
        let body = to_body(record)?;
        let url = self.item_url(C::PATH, id);
        self.send(Method::PUT, &url, Some(&body)).await?;
        Ok(())
    }

    /// Partially update a record, e.g. flipping the feedback `approved` flag.
    pub async fn patch<C: Collection>(
        &self,
        id: &str,
        fields: &impl Serialize,
    ) -> Result<(), ApiError> {
        let body = to_body(fields)?;
        let url = self.item_url(C::PATH, id);
        self.send(Method::PATCH, &url, Some(&body)).await?;
        Ok(())
    }

    /// Delete a record by id.
    pub async fn remove<C: Collection>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(C::PATH, id);
        self.send(Method::DELETE, &url, None).await?;
        Ok(())
    }

    /// Fetch testimonials for the public feedback page. Asks the backend to
    /// filter, then re-checks the flag locally in case the parameter is ignored.
    pub async fn fetch_approved_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        let url = format!("{}?approved=true", self.collection_url(Feedback::PATH));
        let response = self.send(Method::GET, &url, None).await?;
        let payload: ListPayload<Feedback> = response.json().await?;
        let mut items: Vec<Feedback> = payload
            .into_items()
            .into_iter()
            .filter(|f| f.approved)
            .collect();
        query::newest_first(&mut items);
        Ok(items)
    }
}

fn to_body(record: &impl Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(record).map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Event::PATH, "events");
        assert_eq!(Project::PATH, "projects");
        assert_eq!(Article::PATH, "articles");
        assert_eq!(Service::PATH, "services");
        assert_eq!(Feedback::PATH, "feedback");
        assert_eq!(GalleryItem::PATH, "gallery");
        assert_eq!(Contact::PATH, "contacts");
    }

    #[test]
    fn test_fallback_datasets() {
        assert_eq!(Event::fallback().len(), 6);
        assert_eq!(Service::fallback().len(), 6);
        assert_eq!(GalleryItem::fallback().len(), 8);
        // Inquiries only exist in the backend
        assert!(Contact::fallback().is_empty());
    }

    #[test]
    fn test_sort_keys_match_backend_ordering() {
        let event = &Event::fallback()[0];
        assert_eq!(event.sort_key(), event.date);

        let project = &Project::fallback()[0];
        assert_eq!(project.sort_key(), project.completion_date);

        let feedback = &Feedback::fallback()[0];
        assert_eq!(feedback.sort_key(), feedback.created_at);
    }

    #[test]
    fn test_list_payload_accepts_both_shapes() {
        let bare: ListPayload<Service> = serde_json::from_value(serde_json::json!([
            { "id": 1, "name": "A", "description": "a", "image": "x" }
        ]))
        .unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let paged: ListPayload<Service> = serde_json::from_value(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [ { "id": 1, "name": "A", "description": "a", "image": "x" } ]
        }))
        .unwrap();
        assert_eq!(paged.into_items().len(), 1);
    }
}
