use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cannot find {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl DomainError {
    /// Translate a repository error for a lookup by id, mapping "no rows" to `NotFound`.
    pub fn from_lookup(err: sqlx::Error, entity: &'static str, id: i64) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound { entity, id },
            other => DomainError::Database(other),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
