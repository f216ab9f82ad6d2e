//! # API crate: the REST client shared by every AI-Solutions frontend
//!
//! This crate is the backbone of the AI-Solutions site. It wraps the Django REST
//! backend behind a typed client, along with the supporting modules the views
//! depend on.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL resolution (`API_BASE_URL` override at build time) |
//! | [`error`] | [`ApiError`], the error taxonomy every request funnels into |
//! | [`models`] | Content records (`Event`, `Project`, ...) and write payloads |
//! | [`defaults`] | Built-in datasets the public pages fall back to when the backend is down |
//! | [`query`] | Client-side search, category and status filtering, ordering |
//! | `collections` | The [`Collection`] trait tying each record type to its REST endpoint, plus the CRUD verbs on [`Session`] |
//! | `session` | Token lifecycle: login, persistence, bearer injection, refresh-and-retry on 401 |
//!
//! ## Request flow
//!
//! Every call goes through [`Session::send`]: attach the stored access token, issue
//! the request, and on a 401 perform exactly one refresh-and-retry before giving up
//! and tearing the session down. Reads on public pages degrade to the [`defaults`]
//! datasets at the call site; writes surface an [`ApiError`] for the UI to report.

pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod query;

mod collections;
mod session;

pub use collections::Collection;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::Session;

pub use store::UserInfo;
