use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for creating or updating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// Must be between 3 and 30 characters.
    #[validate(length(
        min = 3,
        max = 30,
        message = "Title length must be between 3 and 30 characters"
    ))]
    pub title: String,

    /// Required in the payload; may be blank.
    #[validate(required(message = "Description is required"))]
    pub description: Option<String>,

    /// Defaults to `false` when absent from the payload.
    #[serde(default)]
    pub completed: bool,
}

/// A task as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier (UUID v4), assigned at creation.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Owner of the task, set at creation and never reassigned. `None`
    /// means the task belongs to nobody and fails every ownership check.
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new `Task` from validated input, owned by `user_id`.
    /// Stamps `created_at`/`updated_at` with the current time and assigns
    /// a fresh UUID.
    pub fn new(input: TaskInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            completed: input.completed,
            user_id: Some(user_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this task. A task without an owner is owned
    /// by nobody.
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == Some(user_id)
    }
}
