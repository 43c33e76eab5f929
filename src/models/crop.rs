// src/models/crop.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Milho")]
    pub name: String,
    #[schema(example = 2020)]
    pub year: i32,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub farm_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropInput {
    #[validate(length(min = 1, message = "O nome da cultura é obrigatório."))]
    #[schema(example = "Milho")]
    pub name: String,

    #[schema(example = 2020)]
    pub year: i32,
}

// `harvest` é o índice da safra dentro da mesma fazenda (o id ainda não existe).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCrop {
    pub name: String,
    pub year: i32,
    pub harvest: Option<usize>,
}
