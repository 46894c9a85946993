pub mod db;
pub mod fasting;
pub mod health;
pub mod llm;
pub mod profile;
pub mod tracking;
