//! Handlers for the person resource.
//!
//! ```text
//! GET    /people?limit=&offset=   -> list
//! POST   /person                  -> create
//! GET    /person/{id}             -> get_by_id
//! PUT    /person/{id}             -> update
//! DELETE /person/{id}             -> delete
//! ```

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use people_core::error::CoreError;
use people_core::pagination::PageParams;
use people_core::types::PersonId;
use people_db::models::person::{CreatePerson, Person, UpdatePerson};
use people_db::repositories::PersonRepo;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Person";

/// Message returned for any body that cannot be decoded into the target DTO.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Message returned when the `{id}` path segment is not a UUID.
pub const INVALID_ID: &str = "Invalid person ID";

fn parse_id(raw: &str) -> AppResult<PersonId> {
    PersonId::parse_str(raw).map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))
}

/// Decode a JSON body regardless of the request's `Content-Type`.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(INVALID_PAYLOAD.to_string())
    })
}

/// GET /people
///
/// Never rejects on query parameters: the first occurrence of each key wins
/// and anything unparseable falls back to the default page.
pub async fn list(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Person>>> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let window = PageParams::from_pairs(pairs).window();
    let people = PersonRepo::list(&state.pool, window.limit, window.offset).await?;
    Ok(Json(people))
}

/// POST /person
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Person>)> {
    let input: CreatePerson = decode_body(&body)?;
    input.check()?;
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = %person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /person/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Person>> {
    let id = parse_id(&raw_id)?;
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(person))
}

/// PUT /person/{id}
///
/// Absent and empty-string fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Person>> {
    let id = parse_id(&raw_id)?;
    let input: UpdatePerson = decode_body(&body)?;
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(person_id = %id, "Person updated");
    Ok(Json(person))
}

/// DELETE /person/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&raw_id)?;
    if !PersonRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    tracing::info!(person_id = %id, "Person deleted");
    Ok(Json(json!({ "result": "success" })))
}
