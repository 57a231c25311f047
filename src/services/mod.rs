//! Business services: user registration/resolution and per-user task CRUD.
//!
//! Handlers stay thin; username uniqueness, owner-only mutation, and
//! input validation all live here.

pub mod tasks;
pub mod users;
