use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest},
    error::AppError,
    models::User,
};
use sqlx::PgPool;
use validator::Validate;

/// Registers a new user.
///
/// Validates the payload, rejects a username that is already taken, and
/// stores the bcrypt hash of the password. The pre-insert existence check
/// gives the friendlier error; the `users.username` unique constraint is
/// what actually guarantees uniqueness when two registrations race (the
/// losing insert surfaces as `DuplicateUsername` too).
pub async fn register_user(pool: &PgPool, input: &RegisterRequest) -> Result<i32, AppError> {
    input.validate()?;

    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE username = $1")
        .bind(&input.username)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::DuplicateUsername("Username is already taken".into()));
    }

    let password_hash = hash_password(&input.password)?;

    let user_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(&input.username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user_id)
}

/// Resolves a username to its stored user record.
///
/// Every task operation calls this first to map the authenticated
/// principal to a durable identity. Performs no writes.
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::UserNotFound("User not found".into()))
}

/// Checks a username/password pair against the stored credential.
///
/// Unknown username and wrong password are indistinguishable to the
/// caller: both answer `Unauthorized`.
pub async fn authenticate(pool: &PgPool, input: &LoginRequest) -> Result<User, AppError> {
    let user = match find_by_username(pool, &input.username).await {
        Ok(user) => user,
        Err(AppError::UserNotFound(_)) => {
            return Err(AppError::Unauthorized("Invalid username or password".into()))
        }
        Err(e) => return Err(e),
    };

    if verify_password(&input.password, &user.password_hash)? {
        Ok(user)
    } else {
        Err(AppError::Unauthorized("Invalid username or password".into()))
    }
}
