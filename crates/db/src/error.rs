//! Storage error type shared by the PostgreSQL and in-memory stores.

/// Constraint names, as declared in the migrations.
pub mod constraints {
    pub const UQ_USERS_EMAIL: &str = "uq_users_email";
    pub const UQ_PURCHASES_ITEM_USER: &str = "uq_purchases_item_user";
    pub const UQ_SHARES_TOKEN: &str = "uq_shares_token";

    pub const FK_ITEMS_WISHLIST: &str = "fk_items_wishlist";
    pub const FK_PURCHASES_ITEM: &str = "fk_purchases_item";
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert collided with a unique constraint (named).
    #[error("Duplicate value violates unique constraint: {0}")]
    UniqueViolation(String),

    /// An insert referenced a parent row that does not exist (named
    /// constraint), typically because it was deleted concurrently.
    #[error("Referenced row missing for constraint: {0}")]
    ForeignKeyViolation(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Returns `true` if this is a violation of the given constraint.
    pub fn is_unique_violation(&self, constraint: &str) -> bool {
        matches!(self, StoreError::UniqueViolation(name) if name == constraint)
    }

    /// Returns `true` if this is a violation of the given foreign key.
    pub fn is_foreign_key_violation(&self, constraint: &str) -> bool {
        matches!(self, StoreError::ForeignKeyViolation(name) if name == constraint)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => return StoreError::UniqueViolation(constraint),
                Some(PG_FOREIGN_KEY_VIOLATION) => {
                    return StoreError::ForeignKeyViolation(constraint)
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
