use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registered user as stored and listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    /// Lower-cased, unique
    pub email: String,
    #[serde(rename = "reparto")]
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalized user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// Request body for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "el nombre es obligatorio"))]
    #[schema(example = "Juan")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    #[validate(length(min = 1, message = "el apellido es obligatorio"))]
    #[schema(example = "Pérez")]
    pub last_name: String,

    #[validate(email(message = "formato de email inválido"))]
    #[schema(example = "juan@example.com")]
    pub email: String,

    #[serde(rename = "reparto")]
    #[validate(length(min = 1, message = "el reparto es obligatorio"))]
    #[schema(example = "Ventas")]
    pub department: String,
}

/// Confirmation body returned on successful writes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
