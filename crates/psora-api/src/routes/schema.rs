use axum::Json;

use psora_core::schema::{registration_fields, FieldSpec};

pub async fn registration_schema() -> Json<Vec<FieldSpec>> {
    Json(registration_fields())
}
