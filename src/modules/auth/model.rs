use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::UserRole;

/// JWT claims: subject id, username, role and absolute expiry.
///
/// Claims are stateless; the server keeps no session table, so validity is
/// entirely a function of signature and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (subject)
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Expiry (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: UserRole,
}

/// Self-registration payload. The role is always student; the multiword
/// aliases accept the camelCase keys the web client sends.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1))]
    pub username: String,
    // Presence only; no length policy beyond non-empty.
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "teamsId")]
    pub teams_id: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub program: Option<String>,
    #[serde(alias = "preferredDays")]
    pub preferred_days: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}
