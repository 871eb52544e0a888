use thiserror::Error;

/// Domain errors shared by the venue, artist and show services.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DirectoryError {
    #[must_use]
    pub const fn venue_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Venue", id }
    }

    #[must_use]
    pub const fn artist_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Artist",
            id,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<sea_orm::DbErr> for DirectoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<anyhow::Error> for DirectoryError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<sea_orm::DbErr>() {
            Ok(db) => Self::from(db),
            Err(other) => Self::Persistence(format!("{other:#}")),
        }
    }
}
