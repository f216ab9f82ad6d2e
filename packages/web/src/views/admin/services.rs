//! Admin CRUD screen for service offerings.

use dioxus::prelude::*;

use api::models::Service;
use ui::{
    use_collection_screen, EmptyState, FieldDef, FieldKind, FormSchema, SchemaForm, SearchBox,
    Spinner,
};

const SCHEMA: FormSchema = FormSchema::new(&[
    FieldDef::new("name", "Service Name", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("image", "Image URL", FieldKind::Url).placeholder("https://..."),
    FieldDef::new("features", "Features", FieldKind::List)
        .placeholder("Model audits, Roadmaps, Training"),
]);

#[component]
pub fn AdminServices() -> Element {
    let screen = use_collection_screen::<Service>(SCHEMA);

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Manage Services" }
                button { class: "btn btn--primary", onclick: move |_| screen.open_create(), "Add New Service" }
            }
            SearchBox { value: screen.search, placeholder: "Search services by name..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No services found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Name" }
                            th { "Description" }
                            th { "Features" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for service in screen.visible() {
                            tr { key: "{service.id}",
                                td { img { class: "table-thumb", src: "{service.image}", alt: "{service.name}" } }
                                td { "{service.name}" }
                                td { class: "table-clip", "{service.description}" }
                                td { "{service.features.len()} features" }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let service = service.clone();
                                            move |_| screen.open_edit(&service)
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = service.id.clone();
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
                    label: "Service",
                    editing: (screen.editing)().is_some(),
                    saving: (screen.saving)(),
                    on_submit: move |_| screen.submit(),
                    on_cancel: move |_| screen.close_form(),
                }
            }
        }
    }
}
