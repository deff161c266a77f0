//! HTTP routing for the monuments site
//!
//! Maps path segments to engine calls and empty-result outcomes to 404
//! pages. Each handler fetches one snapshot and reuses it for every engine
//! call in the request.

mod error;
mod pages;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use natmon_core::data::SnapshotSource;
use natmon_core::StateMatch;

pub use error::PageError;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SnapshotSource>,
    pub state_match: StateMatch,
}

/// Build the site router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/presidents", get(pages::presidents))
        .route("/states", get(pages::states))
        .route("/years", get(pages::years))
        .route("/president/:name", get(pages::president))
        .route("/state/:name", get(pages::state))
        .route("/year/:year", get(pages::year))
        .with_state(state)
}
