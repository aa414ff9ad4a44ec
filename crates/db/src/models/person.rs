//! Person entity model and DTOs.

use people_core::error::CoreError;
use people_core::types::{PersonId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A person row from the `people` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub nickname: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person. Every field is required and non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub nickname: String,
}

/// Field names in declaration order, used to report validation failures
/// deterministically.
const CREATE_FIELDS: [&str; 4] = ["first_name", "surname", "email", "nickname"];

impl CreatePerson {
    /// Run the derived validators and collapse any failure into a
    /// [`CoreError::Validation`] naming the first offending field.
    pub fn check(&self) -> Result<(), CoreError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();
        let field = CREATE_FIELDS
            .iter()
            .find(|name| field_errors.contains_key(**name))
            .copied()
            .unwrap_or("payload");
        Err(CoreError::Validation(format!("{field} must not be empty")))
    }
}

/// DTO for updating an existing person. All fields are optional.
///
/// An empty string is treated the same as an absent field: the stored value
/// is kept. There is no way to clear a field through this DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
}
