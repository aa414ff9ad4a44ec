//! Repository for the `people` table.

use chrono::Utc;
use people_core::types::PersonId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, surname, email, nickname, created_at, updated_at";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    ///
    /// The id and both timestamps are generated here; `created_at` and
    /// `updated_at` come from the same clock reading.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO people (id, first_name, surname, email, nickname, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.first_name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.nickname)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a person by id.
    pub async fn find_by_id(pool: &PgPool, id: PersonId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of people, oldest first. Ties on `created_at` fall back
    /// to `id` so paging is stable.
    ///
    /// `limit` and `offset` are bound as given; callers clamp them first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM people
             ORDER BY created_at ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a person. Only fields that are present and non-empty in `input`
    /// are applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: PersonId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET
                first_name = COALESCE(NULLIF($2, ''), first_name),
                surname = COALESCE(NULLIF($3, ''), surname),
                email = COALESCE(NULLIF($4, ''), email),
                nickname = COALESCE(NULLIF($5, ''), nickname),
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.nickname)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a person by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: PersonId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
