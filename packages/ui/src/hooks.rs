//! Data-fetching hooks for the public pages.

use api::models::Feedback;
use api::Collection;
use dioxus::prelude::*;

use crate::session::use_session;

/// Fetch a collection for a public page, falling back to the built-in dataset
/// when the backend is unreachable. Returns `(items, loading)`.
pub fn use_public_collection<C: Collection>() -> (Signal<Vec<C>>, Signal<bool>) {
    let session = use_session();
    let mut items = use_signal(Vec::new);
    let mut loading = use_signal(|| true);

    let _ = use_resource(move || async move {
        match session().fetch::<C>().await {
            Ok(fetched) => items.set(fetched),
            Err(err) => {
                tracing::warn!("falling back to built-in {}: {err}", C::PATH);
                items.set(C::fallback());
            }
        }
        loading.set(false);
    });

    (items, loading)
}

/// Approved testimonials for the public feedback page.
pub fn use_approved_feedback() -> (Signal<Vec<Feedback>>, Signal<bool>) {
    let session = use_session();
    let mut items = use_signal(Vec::new);
    let mut loading = use_signal(|| true);

    let _ = use_resource(move || async move {
        match session().fetch_approved_feedback().await {
            Ok(fetched) => items.set(fetched),
            Err(err) => {
                tracing::warn!("falling back to built-in feedback: {err}");
                items.set(api::defaults::feedback());
            }
        }
        loading.set(false);
    });

    (items, loading)
}
