use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FastingStatus {
    pub user_id: Uuid,
    pub active: bool,
    pub session_id: Option<Uuid>,
    pub protocol: Option<String>,
    pub elapsed_minutes: i64,
    pub suggestion: String,
}
