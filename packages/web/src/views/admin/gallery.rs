//! Admin CRUD screen for gallery images.

use dioxus::prelude::*;

use api::models::GalleryItem;
use ui::{
    format, use_collection_screen, EmptyState, FieldDef, FieldKind, FormSchema, SchemaForm,
    SearchBox, Spinner,
};

const SCHEMA: FormSchema = FormSchema::new(&[
    FieldDef::new("filename", "Filename", FieldKind::Text).placeholder("team-offsite-2025.jpg"),
    FieldDef::new("image", "Image URL", FieldKind::Url).placeholder("https://..."),
    FieldDef::new("category", "Category", FieldKind::Text).placeholder("Events, Team, Office, ..."),
    FieldDef::new("upload_date", "Upload Date", FieldKind::Date),
    FieldDef::new("description", "Description", FieldKind::TextArea).optional(),
]);

#[component]
pub fn AdminGallery() -> Element {
    let screen = use_collection_screen::<GalleryItem>(SCHEMA);

    // New uploads default to today's date
    let open_create = move |_| {
        screen.open_create();
        let mut form = screen.form;
        form.write().insert("upload_date", format::today_iso());
    };

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Manage Gallery" }
                button { class: "btn btn--primary", onclick: open_create, "Add New Image" }
            }
            SearchBox { value: screen.search, placeholder: "Search images by filename..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No images found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Filename" }
                            th { "Category" }
                            th { "Uploaded" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for item in screen.visible() {
                            tr { key: "{item.id}",
                                td { img { class: "table-thumb", src: "{item.image}", alt: "{item.filename}" } }
                                td { "{item.filename}" }
                                td { "{item.category}" }
                                td { "{format::long_date(&item.upload_date)}" }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| screen.open_edit(&item)
                                        },
                                        "Edit"
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

            if (screen.show_form)() {
                SchemaForm {
                    schema: SCHEMA,
                    form: screen.form,
                    label: "Image",
                    editing: (screen.editing)().is_some(),
                    saving: (screen.saving)(),
                    on_submit: move |_| screen.submit(),
                    on_cancel: move |_| screen.close_form(),
                }
            }
        }
    }
}
