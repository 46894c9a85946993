use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateFoodLogInput {
    pub user_id: Uuid,
    pub description: String,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugar_g: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CreateWaterLogInput {
    pub user_id: Uuid,
    pub ml: i32,
}

#[derive(Debug, Clone)]
pub struct CreateWeightLogInput {
    pub user_id: Uuid,
    pub weight_kg: f64,
}
