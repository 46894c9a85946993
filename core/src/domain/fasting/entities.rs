use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const DEFAULT_PROTOCOL: &str = "custom";

/// One fasting window. Invariant: a user has at most one session with
/// `ended_at = None` at any time, enforced by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FastingSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Free-text schedule label (e.g. "16:8"); not validated against a set.
    pub protocol: String,
}

impl FastingSession {
    pub fn new(user_id: Uuid, protocol: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        let protocol = match protocol {
            Some(p) if !p.trim().is_empty() => p,
            _ => DEFAULT_PROTOCOL.to_string(),
        };

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            started_at: now,
            ended_at: None,
            protocol,
        }
    }
}
