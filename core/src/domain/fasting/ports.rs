use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fasting::{entities::FastingSession, value_objects::FastingStatus},
};

/// Repository trait for fasting session persistence.
///
/// `create` is the atomic write path for the "one open session per user"
/// invariant: the store carries a uniqueness constraint on open sessions and
/// the adapter maps its violation to `CoreError::Conflict`. Callers insert
/// optimistically instead of querying first.
#[cfg_attr(test, mockall::automock)]
pub trait FastingSessionRepository: Send + Sync {
    fn create(
        &self,
        session: FastingSession,
    ) -> impl Future<Output = Result<FastingSession, CoreError>> + Send;

    fn find_open(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<FastingSession>, CoreError>> + Send;

    fn update(
        &self,
        session: FastingSession,
    ) -> impl Future<Output = Result<FastingSession, CoreError>> + Send;
}

/// Service trait for the fasting session state machine
pub trait FastingService: Send + Sync {
    fn start_fasting(
        &self,
        user_id: Uuid,
        protocol: Option<String>,
    ) -> impl Future<Output = Result<FastingSession, CoreError>> + Send;

    fn stop_fasting(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<FastingSession, CoreError>> + Send;

    fn fasting_status(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<FastingStatus, CoreError>> + Send;
}
