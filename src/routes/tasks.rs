use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::TaskInput,
    services::tasks,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

/// Retrieves all tasks owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: JSON array of tasks, oldest first. Empty array when the
///   user owns nothing.
/// - `401 Unauthorized`: missing or invalid token.
#[get("/get")]
pub async fn get_tasks(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = tasks::list_tasks(&pool, &user.0).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: 3 to 30 characters (required).
/// - `description`: required, may be blank.
/// - `completed` (optional): defaults to false.
///
/// ## Responses:
/// - `201 Created`: the persisted task, including its assigned id.
/// - `400 Bad Request`: validation failure, message names the field(s).
/// - `401 Unauthorized`: missing or invalid token.
#[post("/create")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = tasks::create_task(&pool, task_data.into_inner(), &user.0).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Updates a task owned by the authenticated user.
///
/// Overwrites `title`, `description`, and `completed`; the owner is never
/// reassigned.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `400 Bad Request`: unknown task id, task owned by someone else, or
///   validation failure.
/// - `401 Unauthorized`: missing or invalid token.
#[put("/update/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task =
        tasks::update_task(&pool, task_id.into_inner(), task_data.into_inner(), &user.0).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `204 No Content`: task removed.
/// - `400 Bad Request`: unknown task id or task owned by someone else.
/// - `401 Unauthorized`: missing or invalid token.
#[delete("/delete/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    tasks::delete_task(&pool, task_id.into_inner(), &user.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
