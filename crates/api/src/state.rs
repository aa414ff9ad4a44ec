/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` and handed to the router; there is no global
/// state. Cheaply cloneable (the pool is reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: people_db::DbPool,
}
