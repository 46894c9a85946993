pub mod create_user;
pub mod get_user;
pub mod list_users;
pub mod onboarding;
pub mod update_goals;
