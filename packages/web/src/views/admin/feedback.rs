//! Feedback moderation screen: approve or reject submitted reviews.
//!
//! No create or edit here; reviews only arrive through the public form. The
//! approve toggle is a partial update and needs no confirmation.

use dioxus::prelude::*;

use api::models::Feedback;
use api::query::{self, StatusFilter};
use ui::{
    browser, format, use_collection_screen, use_session, AppSession, BadgeTone, CollectionScreen,
    EmptyState, FormSchema, Modal, SearchBox, Spinner, StarRating, StatusBadge,
};

// Moderation has no form fields; the controller is used for list/search/delete
const SCHEMA: FormSchema = FormSchema::new(&[]);

fn moderate(
    screen: CollectionScreen<Feedback>,
    session: Signal<AppSession>,
    id: String,
    approved: bool,
) {
    spawn(async move {
        let body = serde_json::json!({ "approved": approved });
        match session().patch::<Feedback>(&id, &body).await {
            Ok(()) => screen.refetch(),
            Err(err) => {
                screen.handle_error("moderating", &err);
                browser::alert("Error updating feedback status. Please try again.");
            }
        }
    });
}

#[component]
pub fn AdminFeedback() -> Element {
    let screen = use_collection_screen::<Feedback>(SCHEMA);
    let session = use_session();
    let mut status = use_signal(StatusFilter::default);
    let mut detail = use_signal(|| Option::<Feedback>::None);

    let visible = query::with_status(&screen.visible(), status());

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Moderate Feedback" }
            }
            div { class: "admin-toolbar",
                SearchBox { value: screen.search, placeholder: "Search feedback by name, company, or review..." }
                select {
                    class: "form-input form-input--inline",
                    value: "{status().value()}",
                    onchange: move |evt| status.set(StatusFilter::from_value(&evt.value())),
                    option { value: "all", "All" }
                    option { value: "approved", "Approved" }
                    option { value: "pending", "Pending" }
                }
            }

            if (screen.loading)() {
                Spinner {}
            } else if visible.is_empty() {
                EmptyState { message: "No feedback found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Company" }
                            th { "Rating" }
                            th { "Review" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for item in visible {
                            tr { key: "{item.id}",
                                td { "{item.name}" }
                                td { "{item.company}" }
                                td { StarRating { value: item.rating } }
                                td { class: "table-clip", "{item.review}" }
                                td {
                                    StatusBadge {
                                        label: if item.approved { "Approved".to_string() } else { "Pending".to_string() },
                                        tone: if item.approved { BadgeTone::Positive } else { BadgeTone::Pending },
                                    }
                                }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| detail.set(Some(item.clone()))
                                        },
                                        "View"
                                    }
                                    button {
                                        class: if item.approved { "btn btn--ghost" } else { "btn btn--primary" },
                                        onclick: {
                                            let id = item.id.clone();
                                            let next = !item.approved;
                                            move |_| moderate(screen, session, id.clone(), next)
                                        },
                                        if item.approved { "Unapprove" } else { "Approve" }
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = item.id.clone();
                                            move |_| screen.remove(id.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(item) = detail() {
                Modal {
                    on_close: move |_| detail.set(None),
                    div { class: "modal-header",
                        h2 { "Feedback from {item.name}" }
                    }
                    StarRating { value: item.rating }
                    p { class: "detail-review", "{item.review}" }
                    dl { class: "detail-list",
                        dt { "Email" }
                        dd { "{item.email}" }
                        dt { "Company" }
                        dd { "{item.company}" }
                        dt { "Submitted" }
                        dd { "{format::long_date(&item.created_at)}" }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn--primary",
                            onclick: {
                                let id = item.id.clone();
                                move |_| {
                                    moderate(screen, session, id.clone(), true);
                                    detail.set(None);
                                }
                            },
                            "Approve"
                        }
                        button {
                            class: "btn btn--danger",
                            onclick: {
                                let id = item.id.clone();
                                move |_| {
                                    moderate(screen, session, id.clone(), false);
                                    detail.set(None);
                                }
                            },
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}
