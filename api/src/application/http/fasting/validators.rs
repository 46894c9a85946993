use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct StartFastingValidator {
    pub user_id: Uuid,

    /// Free-text label such as "16:8". Blank or absent falls back to
    /// "custom".
    #[serde(default)]
    pub protocol: Option<String>,
}
