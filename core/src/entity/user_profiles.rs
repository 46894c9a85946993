use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub goal_pace: Option<String>,
    pub calorie_target_kcal: Option<i32>,
    pub protein_target_g: Option<i32>,
    pub sugar_limit_g: Option<i32>,
    pub water_goal_ml: Option<i32>,
    pub fasting_default_hours: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
