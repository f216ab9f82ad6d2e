//! Star rating display and input.

use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// A read-only row of five stars, filled up to `value`.
#[component]
pub fn StarRating(value: u8) -> Element {
    rsx! {
        span { class: "stars",
            for n in 1..=5u8 {
                span {
                    class: if n <= value { "star star--filled" } else { "star" },
                    Icon { icon: FaStar, width: 16, height: 16 }
                }
            }
        }
    }
}

/// Five clickable stars bound to a signal, for the public feedback form.
#[component]
pub fn RatingInput(value: Signal<u8>) -> Element {
    let mut value = value;
    rsx! {
        div { class: "stars stars--input",
            for n in 1..=5u8 {
                button {
                    r#type: "button",
                    class: if n <= value() { "star star--filled" } else { "star" },
                    onclick: move |_| value.set(n),
                    Icon { icon: FaStar, width: 22, height: 22 }
                }
            }
        }
    }
}
