//! Admin CRUD screen for articles.

use dioxus::prelude::*;

use api::models::Article;
use ui::{
    format, use_collection_screen, EmptyState, FieldDef, FieldKind, FormSchema, SchemaForm,
    SearchBox, Spinner,
};

const SCHEMA: FormSchema = FormSchema::new(&[
    FieldDef::new("title", "Title", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("image", "Image URL", FieldKind::Url).placeholder("https://..."),
    FieldDef::new("author", "Author", FieldKind::Text),
    FieldDef::new("publish_date", "Publish Date", FieldKind::Date),
    FieldDef::new("read_time", "Read Time", FieldKind::Text).placeholder("8 min read"),
    FieldDef::new("category", "Category", FieldKind::Text),
    FieldDef::new("external_link", "External Link", FieldKind::Url).optional(),
]);

#[component]
pub fn AdminArticles() -> Element {
    let screen = use_collection_screen::<Article>(SCHEMA);

    rsx! {
        div { class: "admin-page",
            div { class: "admin-page-header",
                h1 { "Manage Articles" }
                button { class: "btn btn--primary", onclick: move |_| screen.open_create(), "Add New Article" }
            }
            SearchBox { value: screen.search, placeholder: "Search articles by title, author, or category..." }

            if (screen.loading)() {
                Spinner {}
            } else if screen.visible().is_empty() {
                EmptyState { message: "No articles found." }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Title" }
                            th { "Author" }
                            th { "Category" }
                            th { "Published" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for article in screen.visible() {
                            tr { key: "{article.id}",
                                td { img { class: "table-thumb", src: "{article.image}", alt: "{article.title}" } }
                                td { "{article.title}" }
                                td { "{article.author}" }
                                td { "{article.category}" }
                                td { "{format::long_date(&article.publish_date)}" }
                                td { class: "table-actions",
                                    button {
                                        class: "btn btn--ghost",
                                        onclick: {
                                            let article = article.clone();
                                            move |_| screen.open_edit(&article)
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn--danger",
                                        onclick: {
                                            let id = article.id.clone();
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
                    label: "Article",
                    editing: (screen.editing)().is_some(),
                    saving: (screen.saving)(),
                    on_submit: move |_| screen.submit(),
                    on_cancel: move |_| screen.close_form(),
                }
            }
        }
    }
}
