//! Generic state and actions behind every admin CRUD screen.
//!
//! Each screen is the same machine: a fetched list, a search box, a modal form
//! bound to a [`FormSchema`], and submit/delete actions that call the matching
//! REST verb and refetch. [`use_collection_screen`] packages that machine once,
//! so the screens themselves only add their table or card markup.

use std::collections::HashMap;

use dioxus::prelude::*;

use api::{ApiError, Collection};

use crate::browser;
use crate::form::FormSchema;
use crate::session::{use_session, use_session_state, AppSession, SessionState};

/// Handles for one admin screen over collection `C`. Copyable, so event
/// closures can capture it freely.
pub struct CollectionScreen<C: Collection> {
    session: Signal<AppSession>,
    session_state: Signal<SessionState>,
    schema: FormSchema,
    pub items: Signal<Vec<C>>,
    pub loading: Signal<bool>,
    pub search: Signal<String>,
    pub show_form: Signal<bool>,
    pub editing: Signal<Option<String>>,
    pub form: Signal<HashMap<&'static str, String>>,
    pub saving: Signal<bool>,
}

impl<C: Collection> Clone for CollectionScreen<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection> Copy for CollectionScreen<C> {}

/// Build the state for one admin screen and start the initial fetch.
pub fn use_collection_screen<C: Collection>(schema: FormSchema) -> CollectionScreen<C> {
    let screen = CollectionScreen {
        session: use_session(),
        session_state: use_session_state(),
        schema,
        items: use_signal(Vec::new),
        loading: use_signal(|| true),
        search: use_signal(String::new),
        show_form: use_signal(|| false),
        editing: use_signal(|| None),
        form: use_signal(move || schema.blank()),
        saving: use_signal(|| false),
    };

    let _ = use_resource(move || async move {
        screen.load().await;
    });

    screen
}

impl<C: Collection> CollectionScreen<C> {
    async fn load(mut self) {
        match (self.session)().fetch::<C>().await {
            Ok(fetched) => self.items.set(fetched),
            Err(err) => self.handle_error("loading", &err),
        }
        self.loading.set(false);
    }

    /// Reload the list after a mutation.
    pub fn refetch(self) {
        spawn(async move {
            self.load().await;
        });
    }

    /// Records matching the current search text.
    pub fn visible(&self) -> Vec<C> {
        api::query::search(&self.items.read(), &self.search.read())
    }

    pub fn open_create(mut self) {
        self.editing.set(None);
        self.form.set(self.schema.blank());
        self.show_form.set(true);
    }

    pub fn open_edit(mut self, record: &C) {
        match serde_json::to_value(record) {
            Ok(value) => {
                self.editing.set(Some(record.id().to_string()));
                self.form.set(self.schema.prefill(&value));
                self.show_form.set(true);
            }
            Err(err) => tracing::error!("prefill {} failed: {err}", C::PATH),
        }
    }

    pub fn close_form(mut self) {
        self.show_form.set(false);
        self.editing.set(None);
    }

    /// Create or update, depending on whether an edit is in progress.
    pub fn submit(mut self) {
        spawn(async move {
            self.saving.set(true);
            let payload = self.schema.payload(&self.form.read());
            let editing = (self.editing)();
            let session = (self.session)();
            let result = match &editing {
                Some(id) => session.update::<C>(id, &payload).await,
                None => session.insert::<C>(&payload).await,
            };
            self.saving.set(false);

            match result {
                Ok(()) => {
                    self.show_form.set(false);
                    self.editing.set(None);
                    self.form.set(self.schema.blank());
                    let verb = if editing.is_some() { "updated" } else { "created" };
                    browser::alert(&format!("{} {verb} successfully!", C::LABEL));
                    self.refetch();
                }
                Err(err) => {
                    self.handle_error("saving", &err);
                    browser::alert(&format!(
                        "Error saving {}. Please try again.",
                        C::LABEL.to_lowercase()
                    ));
                }
            }
        });
    }

    /// Confirm, then delete a record and refetch.
    pub fn remove(self, id: String) {
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            C::LABEL.to_lowercase()
        );
        if !browser::confirm(&prompt) {
            return;
        }
        spawn(async move {
            match (self.session)().remove::<C>(&id).await {
                Ok(()) => {
                    browser::alert(&format!("{} deleted successfully!", C::LABEL));
                    self.refetch();
                }
                Err(err) => {
                    self.handle_error("deleting", &err);
                    browser::alert(&format!(
                        "Error deleting {}. Please try again.",
                        C::LABEL.to_lowercase()
                    ));
                }
            }
        });
    }

    /// Log the failure. An expired session additionally signs the admin out,
    /// which makes the shell guard bounce to the login screen.
    pub fn handle_error(mut self, action: &str, err: &ApiError) {
        tracing::error!("{action} {} failed: {err}", C::PATH);
        if *err == ApiError::Unauthorized {
            self.session_state.set(SessionState {
                user: None,
                loading: false,
            });
        }
    }
}
