use uuid::Uuid;
use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone)]
pub struct Ingredient {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(rename  = "unitOfMeasureId")]
    pub unit_of_measure_id: Uuid
}
