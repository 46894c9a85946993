use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::UserProfile,
        value_objects::{CreateUserInput, OnboardingInput, UpdateGoalsInput},
    },
};

/// Repository trait for user profile persistence
#[cfg_attr(test, mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    fn create(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;

    fn update(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

/// Service trait for profile business logic
pub trait ProfileService: Send + Sync {
    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;

    fn get_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    /// Applies onboarding metrics and recomputes every derived target.
    fn onboarding(
        &self,
        user_id: Uuid,
        input: OnboardingInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_goals(
        &self,
        input: UpdateGoalsInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_water_goal(
        &self,
        user_id: Uuid,
        water_goal_ml: i32,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
