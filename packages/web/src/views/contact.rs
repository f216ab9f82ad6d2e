//! Public contact page: inquiry form posting to the contacts collection.

use dioxus::prelude::*;

use api::models::{Contact as ContactRecord, ContactSubmission};
use ui::{browser, use_session, PageHero};

const OFFICES: &[(&str, &str, &str)] = &[
    ("Sunderland", "1 Innovation Way, Sunderland, UK", "+44 191 555 0134"),
    ("London", "48 Finsbury Square, London, UK", "+44 20 7946 0521"),
    ("San Francisco", "535 Mission St, San Francisco, CA", "+1 415 555 0198"),
];

#[component]
pub fn Contact() -> Element {
    let session = use_session();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut job_title = use_signal(String::new);
    let mut job_details = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let submission = ContactSubmission {
                full_name: full_name().trim().to_string(),
                email: email().trim().to_string(),
                phone: phone().trim().to_string(),
                company: company().trim().to_string(),
                country: country().trim().to_string(),
                job_title: job_title().trim().to_string(),
                job_details: job_details().trim().to_string(),
            };
            if submission.full_name.is_empty()
                || submission.email.is_empty()
                || submission.country.is_empty()
                || submission.job_details.is_empty()
            {
                browser::alert("Please fill in all required fields.");
                return;
            }

            submitting.set(true);
            let result = session().insert::<ContactRecord>(&submission).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    browser::alert("Thank you for your inquiry! We will be in touch shortly.");
                    full_name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    company.set(String::new());
                    country.set(String::new());
                    job_title.set(String::new());
                    job_details.set(String::new());
                }
                Err(err) => {
                    tracing::error!("contact submission failed: {err}");
                    browser::alert("Error submitting your inquiry. Please try again.");
                }
            }
        });
    };

    rsx! {
        PageHero {
            title: "Contact Us",
            subtitle: "Tell us about your project and we will get back to you.",
        }

        section { class: "section",
            div { class: "section-inner",
                div { class: "card-grid card-grid--3",
                    for (city, address, telephone) in OFFICES.iter().copied() {
                        div { class: "feature-card",
                            h3 { "{city}" }
                            p { "{address}" }
                            p { "{telephone}" }
                        }
                    }
                }
            }
        }

        section { class: "section section--alt",
            div { class: "section-inner section-inner--narrow",
                h2 { class: "section-title", "Send an Inquiry" }
                form { class: "public-form", onsubmit: handle_submit,
                    div { class: "form-row",
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Full Name *",
                            required: true,
                            value: "{full_name}",
                            oninput: move |evt| full_name.set(evt.value()),
                        }
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "Email *",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        input {
                            class: "form-input",
                            r#type: "tel",
                            placeholder: "Phone",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Company",
                            value: "{company}",
                            oninput: move |evt| company.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Country *",
                            required: true,
                            value: "{country}",
                            oninput: move |evt| country.set(evt.value()),
                        }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Job Title",
                            value: "{job_title}",
                            oninput: move |evt| job_title.set(evt.value()),
                        }
                    }
                    textarea {
                        class: "form-input",
                        rows: "5",
                        placeholder: "How can we help? *",
                        required: true,
                        value: "{job_details}",
                        oninput: move |evt| job_details.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: submitting(),
                        if submitting() { "Sending..." } else { "Submit Inquiry" }
                    }
                }
            }
        }
    }
}
