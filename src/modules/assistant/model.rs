use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AskRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,
    /// Requester role; defaults to "visitor" when absent.
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub response: String,
}
