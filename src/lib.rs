//! The `todolist` library crate.
//!
//! Contains the domain models, authentication plumbing, business services,
//! routing configuration, and error handling for the to-do list API.
//! The binary (`main.rs`) assembles these into a running server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
