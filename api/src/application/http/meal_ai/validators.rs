use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseMealValidator {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogMealValidator {
    pub user_id: Uuid,

    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
