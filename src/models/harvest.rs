// src/models/harvest.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Harvest {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 2020)]
    pub year: i32,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub farm_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HarvestInput {
    #[schema(example = 2020)]
    pub year: i32,

    // Só serve para casar com as culturas da fazenda pelo nome; não é persistido.
    #[serde(default)]
    pub crops: Vec<HarvestCropName>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HarvestCropName {
    #[schema(example = "Milho")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHarvest {
    pub year: i32,
}
