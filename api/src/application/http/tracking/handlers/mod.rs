pub mod add_food;
pub mod add_water;
pub mod add_weight;
pub mod update_water_goal;
