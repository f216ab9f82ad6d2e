//! Public feedback page: approved testimonials plus the submission form.
//!
//! Submissions always go out unapproved; an admin flips the flag before a
//! review shows up in the listing.

use dioxus::prelude::*;

use api::models::{Feedback, FeedbackSubmission};
use ui::{browser, format, use_approved_feedback, use_session, PageHero, RatingInput, Spinner, StarRating};

#[component]
pub fn FeedbackPage() -> Element {
    let session = use_session();
    let (reviews, loading) = use_approved_feedback();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut company = use_signal(String::new);
    let rating = use_signal(|| 5u8);
    let mut review = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let submission = FeedbackSubmission::new(
                name().trim().to_string(),
                email().trim().to_string(),
                company().trim().to_string(),
                rating(),
                review().trim().to_string(),
            );
            if submission.name.is_empty() || submission.email.is_empty() || submission.review.is_empty() {
                browser::alert("Please fill in your name, email, and review.");
                return;
            }

            submitting.set(true);
            let result = session().insert::<Feedback>(&submission).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    browser::alert("Thank you for your feedback! It will appear once approved.");
                    name.set(String::new());
                    email.set(String::new());
                    company.set(String::new());
                    review.set(String::new());
                }
                Err(err) => {
                    tracing::error!("feedback submission failed: {err}");
                    browser::alert("Error submitting feedback. Please try again.");
                }
            }
        });
    };

    rsx! {
        PageHero {
            title: "Client Feedback",
            subtitle: "What our clients say about working with AI-Solutions.",
        }

        section { class: "section",
            div { class: "section-inner",
                if loading() {
                    Spinner {}
                } else {
                    div { class: "card-grid card-grid--2",
                        for item in reviews() {
                            div { class: "testimonial-card", key: "{item.id}",
                                StarRating { value: item.rating }
                                p { class: "testimonial-review", "\"{item.review}\"" }
                                div { class: "card-meta",
                                    span { class: "testimonial-name", "{item.name}" }
                                    span { "{item.company}" }
                                }
                                span { class: "testimonial-date", "{format::long_date(&item.created_at)}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section--alt",
            div { class: "section-inner section-inner--narrow",
                h2 { class: "section-title", "Share Your Experience" }
                form { class: "public-form", onsubmit: handle_submit,
                    div { class: "form-row",
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Your Name *",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "Your Email *",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Company",
                        value: "{company}",
                        oninput: move |evt| company.set(evt.value()),
                    }
                    div { class: "form-field",
                        label { "Your Rating" }
                        RatingInput { value: rating }
                    }
                    textarea {
                        class: "form-input",
                        rows: "4",
                        placeholder: "Your Review *",
                        required: true,
                        value: "{review}",
                        oninput: move |evt| review.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit Feedback" }
                    }
                }
            }
        }
    }
}
