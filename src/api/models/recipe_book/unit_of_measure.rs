use uuid::Uuid;
use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone)]
pub struct UnitOfMeasure {
    pub id: Uuid,
    pub description: String
}
