//! Admin CRUD screen for portfolio projects.

use dioxus::prelude::*;

use api::models::Project;
use ui::{
    format, use_collection_screen, EmptyState, FieldDef, FieldKind, FormSchema, SchemaForm,
    SearchBox, Spinner,
};

const SCHEMA: FormSchema = FormSchema::new(&[
    FieldDef::new("name", "Project Name", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("image", "Image URL", FieldKind::Url).placeholder("https://..."),
    FieldDef::new("category", "Category", FieldKind::Text).placeholder("Healthcare, Finance, ..."),
    FieldDef::new("completion_date", "Completion Date", FieldKind::Date),
    FieldDef::new("client", "Client", FieldKind::Text),
    FieldDef::new("technologies", "Technologies", FieldKind::List)
        .placeholder("Python, TensorFlow, NLP"),
]);

#[component]
pub fn AdminProjects() -> Element {
    let screen = use_collection_screen::<Project>(SCHEMA);

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Manage Projects" }
                button { class: "btn btn--primary", onclick: move |_| screen.open_create(), "Add New Project" }
            }
            SearchBox { value: screen.search, placeholder: "Search projects by name, category, or client..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No projects found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Name" }
                            th { "Category" }
                            th { "Client" }
                            th { "Completed" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for project in screen.visible() {
                            tr { key: "{project.id}",
                                td { img { class: "table-thumb", src: "{project.image}", alt: "{project.name}" } }
                                td { "{project.name}" }
                                td { "{project.category}" }
                                td { "{project.client}" }
                                td { "{format::long_date(&project.completion_date)}" }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let project = project.clone();
                                            move |_| screen.open_edit(&project)
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = project.id.clone();
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
                    label: "Project",
                    editing: (screen.editing)().is_some(),
                    saving: (screen.saving)(),
                    on_submit: move |_| screen.submit(),
                    on_cancel: move |_| screen.close_form(),
                }
            }
        }
    }
}
