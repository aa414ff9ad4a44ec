pub mod health;
pub mod person;

use axum::Router;

use crate::state::AppState;

/// Build the person resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people                  list
/// /person                  create
/// /person/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(person::router())
}
