//! Modal create/edit dialog rendered from a [`FormSchema`].

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::form::{FieldDef, FieldKind, FormSchema};
use crate::modal::Modal;

/// Create/edit dialog for one record, driven entirely by the schema. The parent
/// owns the value map (usually `CollectionScreen::form`) and supplies the
/// submit/cancel actions.
#[component]
pub fn SchemaForm(
    schema: FormSchema,
    form: Signal<HashMap<&'static str, String>>,
    label: String,
    editing: bool,
    saving: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if editing {
        format!("Edit {label}")
    } else {
        format!("Add New {label}")
    };
    let submit_label = if editing {
        format!("Update {label}")
    } else {
        format!("Create {label}")
    };

    rsx! {
        Modal {
            on_close: move |_| on_cancel.call(()),
            div { class: "modal-header",
                h2 { "{title}" }
            }
            form {
                class: "schema-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                for field in schema.fields.iter() {
                    div { class: "form-field",
                        label {
                            "{field.label}"
                            if field.required {
                                span { class: "form-required", " *" }
                            }
                        }
                        {field_input(*field, form)}
                    }
                }
                div { class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn--ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary",
                        disabled: saving,
                        if saving { "Saving..." } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}

fn field_input(field: FieldDef, mut form: Signal<HashMap<&'static str, String>>) -> Element {
    let value = form.read().get(field.name).cloned().unwrap_or_default();

    match field.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                class: "form-input",
                rows: "3",
                required: field.required,
                placeholder: field.placeholder,
                value: "{value}",
                oninput: move |evt| {
                    form.write().insert(field.name, evt.value());
                },
            }
        },
        FieldKind::Select(options) => rsx! {
            select {
                class: "form-input",
                required: field.required,
                value: "{value}",
                onchange: move |evt| {
                    form.write().insert(field.name, evt.value());
                },
                if field.initial.is_empty() {
                    option { value: "", "Select {field.label}" }
                }
                for (option_value, option_label) in options.iter() {
                    option { value: "{option_value}", "{option_label}" }
                }
            }
        },
        FieldKind::List => rsx! {
            input {
                class: "form-input",
                r#type: "text",
                required: field.required,
                placeholder: field.placeholder,
                value: "{value}",
                oninput: move |evt| {
                    form.write().insert(field.name, evt.value());
                },
            }
            p { class: "form-hint", "Separate entries with commas" }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Url => "url",
                FieldKind::Date => "date",
                FieldKind::Number => "number",
                _ => "text",
            };
            rsx! {
                input {
                    class: "form-input",
                    r#type: "{input_type}",
                    required: field.required,
                    placeholder: field.placeholder,
                    value: "{value}",
                    oninput: move |evt| {
                        form.write().insert(field.name, evt.value());
                    },
                }
            }
        }
    }
}
