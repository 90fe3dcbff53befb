use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub student_id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub codeforces_handle: String,
    pub current_rating: i32,
    pub max_rating: i32,
    pub created_at: chrono::NaiveDateTime,
}
