//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{
    make_session, use_session, use_session_state, AppSession, PlatformStore, SessionProvider,
    SessionState,
};

mod hooks;
pub use hooks::{use_approved_feedback, use_public_collection};

mod crud;
pub use crud::{use_collection_screen, CollectionScreen};

pub mod form;
pub use form::{FieldDef, FieldKind, FormSchema};

mod schema_form;
pub use schema_form::SchemaForm;

pub mod browser;
pub mod format;

mod modal;
pub use modal::Modal;

mod spinner;
pub use spinner::Spinner;

mod stars;
pub use stars::{RatingInput, StarRating};

mod status_badge;
pub use status_badge::{BadgeTone, StatusBadge};

mod search_box;
pub use search_box::SearchBox;

mod page_header;
pub use page_header::PageHero;

mod empty_state;
pub use empty_state::EmptyState;
