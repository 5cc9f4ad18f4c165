use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the requested id. Displays as `"{entity} not found"`,
    /// which is the exact text returned to HTTP clients.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}
