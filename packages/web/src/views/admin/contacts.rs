//! Read-only admin screen for contact inquiries: search, detail, delete.

use dioxus::prelude::*;

use api::models::Contact;
use ui::{
    format, use_collection_screen, EmptyState, FormSchema, Modal, SearchBox, Spinner,
};

// Inquiries are created by visitors, never from the back-office
const SCHEMA: FormSchema = FormSchema::new(&[]);

#[component]
pub fn AdminContacts() -> Element {
    let screen = use_collection_screen::<Contact>(SCHEMA);
    let mut detail = use_signal(|| Option::<Contact>::None);

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Contact Inquiries" }
            }
            SearchBox { value: screen.search, placeholder: "Search inquiries by name, email, or company..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No inquiries found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Company" }
                            th { "Country" }
                            th { "Received" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for contact in screen.visible() {
                            tr { key: "{contact.id}",
                                td { "{contact.full_name}" }
                                td { "{contact.email}" }
                                td { "{contact.company}" }
                                td { "{contact.country}" }
                                td { "{format::long_date(&contact.created_at)}" }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let contact = contact.clone();
                                            move |_| detail.set(Some(contact.clone()))
                                        },
                                        "View"
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = contact.id.clone();
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

            if let Some(contact) = detail() {
                Modal {
                    on_close: move |_| detail.set(None),
                    div { class: "modal-header",
                        h2 { "Inquiry from {contact.full_name}" }
                    }
                    dl { class: "detail-list",
                        dt { "Email" }
                        dd { "{contact.email}" }
                        dt { "Phone" }
                        dd { "{contact.phone}" }
                        dt { "Company" }
                        dd { "{contact.company}" }
                        dt { "Country" }
                        dd { "{contact.country}" }
                        dt { "Job Title" }
                        dd { "{contact.job_title}" }
                        dt { "Received" }
                        dd { "{format::long_date(&contact.created_at)}" }
                    }
                    p { class: "detail-review", "{contact.job_details}" }
                }
            }
        }
    }
}
