pub mod fasting_session_repository;
