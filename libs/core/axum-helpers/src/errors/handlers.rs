use axum::response::{IntoResponse, Response};

use super::AppError;

/// Handler for unknown routes.
///
/// Used as the router fallback so 404s share the `{"error": ...}` body shape.
pub async fn not_found() -> Response {
    AppError::NotFound("recurso no encontrado".to_string()).into_response()
}
