use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{AppError, ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateUser, MessageResponse, User};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const USER_CREATED: &str = "usuario creado exitosamente";
pub const CREATE_FAILED: &str = "no se pudo crear el usuario";
pub const LIST_FAILED: &str = "no se pudo obtener usuarios";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, list_users),
    components(schemas(User, CreateUser, MessageResponse, ErrorResponse)),
    tags(
        (name = "usuarios", description = "User registration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .with_state(shared_service)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
        (status = 500, description = "User could not be stored", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> Result<impl IntoResponse, AppError> {
    service
        .create_user(
            &input.first_name,
            &input.last_name,
            &input.email,
            &input.department,
        )
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                unique_violation = e.is_unique_violation(),
                "Failed to create user"
            );
            AppError::InternalServerError(CREATE_FAILED.to_string())
        })?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(USER_CREATED))))
}

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "Every registered user", body = Vec<User>),
        (status = 500, description = "Users could not be read", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = service.list_users().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list users");
        AppError::InternalServerError(LIST_FAILED.to_string())
    })?;

    Ok(Json(users))
}
