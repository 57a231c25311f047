use crate::{
    auth::{generate_token, AuthResponse, LoginRequest, RegisterRequest},
    error::AppError,
    services::users,
};
use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// Register a new user
///
/// Creates a new user account. A duplicate or invalid username answers
/// 400 with the reason in the body.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    users::register_user(&pool, &register_data).await?;

    Ok(HttpResponse::Ok().finish())
}

/// Login
///
/// Checks the credentials and returns the bearer token the client presents
/// on subsequent requests. Unknown username and wrong password both answer
/// 401.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = users::authenticate(&pool, &login_data).await?;

    let token = generate_token(&user.username)?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}

/// Login status probe
///
/// Reports whether the request carries a valid token. Never errors; an
/// absent or invalid token simply reads as logged out.
#[get("/status")]
pub async fn status(req: HttpRequest) -> impl Responder {
    let is_logged_in = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| crate::auth::verify_token(token).is_ok())
        .unwrap_or(false);

    HttpResponse::Ok().json(json!({ "isLoggedIn": is_logged_in }))
}
