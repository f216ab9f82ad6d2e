use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Search input with a magnifier icon, bound to a signal.
#[component]
pub fn SearchBox(value: Signal<String>, placeholder: String) -> Element {
    let mut value = value;
    rsx! {
        div { class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}
