/// Aggregate service over every repository port plus the LLM client.
///
/// Domain modules implement their service traits on this struct; the
/// concrete wiring lives in `crate::application`.
#[derive(Debug, Clone)]
pub struct Service<UP, FL, WA, WL, FS, HC, L> {
    pub user_profile_repository: UP,
    pub food_log_repository: FL,
    pub water_log_repository: WA,
    pub weight_log_repository: WL,
    pub fasting_session_repository: FS,
    pub health_check_repository: HC,
    pub llm_client: L,
}

impl<UP, FL, WA, WL, FS, HC, L> Service<UP, FL, WA, WL, FS, HC, L> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_profile_repository: UP,
        food_log_repository: FL,
        water_log_repository: WA,
        weight_log_repository: WL,
        fasting_session_repository: FS,
        health_check_repository: HC,
        llm_client: L,
    ) -> Self {
        Self {
            user_profile_repository,
            food_log_repository,
            water_log_repository,
            weight_log_repository,
            fasting_session_repository,
            health_check_repository,
            llm_client,
        }
    }
}
