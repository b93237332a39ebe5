//! Catalog HTTP Routes
//!
//! `GET <base>` renders the list; `POST <base>` creates or deletes a record.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::warn;

use crate::catalog::{IdentifierSequence, Store};
use crate::dispatch::{CatalogForm, Dispatcher, Outcome};
use crate::render;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
#[derive(Debug)]
pub struct CatalogState {
    pub dispatcher: Dispatcher,
}

impl CatalogState {
    /// Fresh, empty catalog served under `base_path`
    pub fn new(base_path: impl Into<String>) -> Self {
        Self::with_parts(
            Arc::new(Store::new()),
            Arc::new(IdentifierSequence::new()),
            base_path,
        )
    }

    pub fn with_parts(
        store: Arc<Store>,
        sequence: Arc<IdentifierSequence>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(store, sequence, base_path),
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        self.dispatcher.store()
    }
}

// ==================
// Catalog Routes
// ==================

/// Create catalog routes mounted at `base_path`
pub fn catalog_routes(state: Arc<CatalogState>) -> Router {
    let base_path = state.dispatcher.base_path().to_string();
    Router::new()
        .route(&base_path, get(list_handler).post(submit_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_handler(State(state): State<Arc<CatalogState>>) -> Response {
    respond(&state, state.dispatcher.list())
}

/// Repeated keys keep their first value. An undecodable body is treated as
/// an empty form, so the user still gets the catalog page back.
async fn submit_handler(
    State(state): State<Arc<CatalogState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(pairs)) => CatalogForm::from_pairs(pairs),
        Err(e) => {
            warn!(error = %e, "unreadable form body");
            CatalogForm::default()
        }
    };
    respond(&state, state.dispatcher.submit(&form))
}

fn respond(state: &CatalogState, outcome: Outcome) -> Response {
    match outcome {
        Outcome::Redirect(location) => Redirect::to(&location).into_response(),
        Outcome::Page { fragment, error } => Html(render::page(
            &fragment,
            error.as_deref(),
            state.dispatcher.base_path(),
        ))
        .into_response(),
    }
}
