use crate::{
    error::AppError,
    models::{Task, TaskInput},
    services::users,
};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Returns all tasks owned by the resolved user, oldest first.
///
/// An empty list is a valid result, not an error.
pub async fn list_tasks(pool: &PgPool, username: &str) -> Result<Vec<Task>, AppError> {
    let user = users::find_by_username(pool, username).await?;

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, user_id, created_at, updated_at
         FROM tasks WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

/// Creates a task owned by the resolved user and returns the persisted row.
pub async fn create_task(pool: &PgPool, input: TaskInput, username: &str) -> Result<Task, AppError> {
    input.validate()?;

    let user = users::find_by_username(pool, username).await?;
    let task = Task::new(input, user.id);

    let created = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (id, title, description, completed, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, title, description, completed, user_id, created_at, updated_at",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.completed)
    .bind(task.user_id)
    .bind(task.created_at)
    .bind(task.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Overwrites `title`, `description`, and `completed` of a task the
/// resolved user owns. The owner is never touched.
///
/// Fails with `TaskNotFound` when the id matches nothing and with
/// `NotOwner` (no write performed) when the task belongs to someone else.
pub async fn update_task(
    pool: &PgPool,
    task_id: Uuid,
    input: TaskInput,
    username: &str,
) -> Result<Task, AppError> {
    input.validate()?;

    let user = users::find_by_username(pool, username).await?;
    let task = find_task(pool, task_id).await?;

    if !task.is_owned_by(user.id) {
        return Err(AppError::NotOwner("You can only edit your own tasks".into()));
    }

    let updated = sqlx::query_as::<_, Task>(
        "UPDATE tasks SET title = $1, description = $2, completed = $3, updated_at = $4
         WHERE id = $5
         RETURNING id, title, description, completed, user_id, created_at, updated_at",
    )
    .bind(&input.title)
    .bind(input.description.unwrap_or_default())
    .bind(input.completed)
    .bind(Utc::now())
    .bind(task_id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Permanently removes a task the resolved user owns.
///
/// Same lookup-and-ownership sequence as [`update_task`].
pub async fn delete_task(pool: &PgPool, task_id: Uuid, username: &str) -> Result<(), AppError> {
    let user = users::find_by_username(pool, username).await?;
    let task = find_task(pool, task_id).await?;

    if !task.is_owned_by(user.id) {
        return Err(AppError::NotOwner("You can only delete your own tasks".into()));
    }

    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(pool)
        .await?;

    Ok(())
}

async fn find_task(pool: &PgPool, task_id: Uuid) -> Result<Task, AppError> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, user_id, created_at, updated_at
         FROM tasks WHERE id = $1",
    )
    .bind(task_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::TaskNotFound("Task not found".into()))
}
