//! Startup entity model and DTOs.

use explorer_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `startups` table.
///
/// Always serialized with all three fields: `{"id", "name", "category"}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Startup {
    pub id: DbId,
    pub name: String,
    pub category: String,
}

/// Request body for creating or updating a startup.
///
/// The id never comes from the body: the database assigns it on create and
/// the URL path supplies it on update. A stray `id` key is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartupInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

impl StartupInput {
    /// Attach an id to the submitted fields.
    pub fn into_startup(self, id: DbId) -> Startup {
        Startup {
            id,
            name: self.name,
            category: self.category,
        }
    }
}
