use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// Unique-violations on insert/update become `ConstraintViolation` so the
    /// web layer can answer 409 instead of a generic 500.
    pub fn into_constraint_violation(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}
