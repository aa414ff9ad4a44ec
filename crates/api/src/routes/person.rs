use axum::routing::{get, post};
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes for the person resource.
///
/// ```text
/// GET    /people          -> list
/// POST   /person          -> create
/// GET    /person/{id}     -> get_by_id
/// PUT    /person/{id}     -> update
/// DELETE /person/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(person::list))
        .route("/person", post(person::create))
        .route(
            "/person/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
}
