use sqlx::FromRow;

/// A registered user as stored in the `users` table.
///
/// `password_hash` is the bcrypt digest of the registration password; the
/// raw password is never stored. User records are never serialized into
/// API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    /// Unique across all users, immutable after creation.
    pub username: String,
    pub password_hash: String,
}
