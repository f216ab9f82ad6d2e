//! Admin CRUD screen for events.

use dioxus::prelude::*;

use api::models::{Event, EventKind};
use ui::{
    format, use_collection_screen, BadgeTone, EmptyState, FieldDef, FieldKind, FormSchema,
    SchemaForm, SearchBox, Spinner, StatusBadge,
};

const SCHEMA: FormSchema = FormSchema::new(&[
    FieldDef::new("title", "Title", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("image", "Image URL", FieldKind::Url).placeholder("https://..."),
    FieldDef::new("date", "Date", FieldKind::Date),
    FieldDef::new("time", "Time", FieldKind::Text).placeholder("09:00 AM"),
    FieldDef::new("location", "Location", FieldKind::Text),
    FieldDef::new(
        "event_type",
        "Event Type",
        FieldKind::Select(&[("upcoming", "Upcoming"), ("past", "Past")]),
    )
    .default_value("upcoming"),
    FieldDef::new("max_attendees", "Max Attendees", FieldKind::Number).optional(),
    FieldDef::new("registration_link", "Registration Link", FieldKind::Url).optional(),
]);

#[component]
pub fn AdminEvents() -> Element {
    let screen = use_collection_screen::<Event>(SCHEMA);

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Manage Events" }
                button { class: "btn btn--primary", onclick: move |_| screen.open_create(), "Add New Event" }
            }
            SearchBox { value: screen.search, placeholder: "Search events by title or location..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No events found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Title" }
                            th { "Date" }
                            th { "Location" }
                            th { "Type" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for event in screen.visible() {
                            tr { key: "{event.id}",
                                td { img { class: "table-thumb", src: "{event.image}", alt: "{event.title}" } }
                                td { "{event.title}" }
                                td { "{format::long_date(&event.date)}" }
                                td { "{event.location}" }
                                td {
                                    StatusBadge {
                                        label: if event.kind == EventKind::Upcoming { "Upcoming".to_string() } else { "Past".to_string() },
                                        tone: if event.kind == EventKind::Upcoming { BadgeTone::Positive } else { BadgeTone::Neutral },
                                    }
                                }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let event = event.clone();
                                            move |_| screen.open_edit(&event)
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = event.id.clone();
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

            if (screen.show_form)() {
                SchemaForm {
                    schema: SCHEMA,
                    form: screen.form,
                    label: "Event",
                    editing: (screen.editing)().is_some(),
                    saving: (screen.saving)(),
                    on_submit: move |_| screen.submit(),
                    on_cancel: move |_| screen.close_form(),
                }
            }
        }
    }
}
