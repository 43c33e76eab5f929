// src/models/farm.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::crop::{Crop, CropInput, NewCrop};
use crate::models::harvest::{Harvest, HarvestInput, NewHarvest};
use crate::models::producer::ProducerRef;

// Limites da coluna NUMERIC(14, 4): até 10 dígitos inteiros e 4 casas decimais.
const AREA_MAX_SCALE: u32 = 4;

fn area_max_exclusive() -> Decimal {
    Decimal::from(10_000_000_000_i64)
}

fn validate_area(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("A área deve ser um número positivo.".into());
        return Err(err);
    }
    let max = area_max_exclusive();
    if *val >= max {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &max.to_string());
        err.message = Some("A área deve ser menor que 10.000.000.000 hectares.".into());
        return Err(err);
    }
    if val.normalize().scale() > AREA_MAX_SCALE {
        let mut err = ValidationError::new("scale");
        err.add_param("max_scale".into(), &AREA_MAX_SCALE);
        err.message = Some("A área aceita no máximo 4 casas decimais.".into());
        return Err(err);
    }
    Ok(())
}

// --- LEITURA ---

// Áreas em hectares.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Fazenda do João")]
    pub name: String,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = 10.0)]
    pub total_area: Decimal,
    #[schema(example = 5.0)]
    pub arable_area: Decimal,
    #[schema(example = 5.0)]
    pub vegetation_area: Decimal,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub producer_id: i32,

    // Só preenchido na listagem de fazendas (GET /farms)
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<ProducerRef>,

    #[sqlx(skip)]
    pub crops: Vec<Crop>,

    #[sqlx(skip)]
    pub harvests: Vec<Harvest>,
}

// --- ESCRITA ---

/// Fazenda como vem aninhada no produtor (e base do payload de /farms).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    #[validate(length(min = 1, message = "O nome da fazenda é obrigatório."))]
    #[schema(example = "Fazenda do João")]
    pub name: String,

    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    #[schema(example = "São Paulo")]
    pub city: String,

    #[validate(length(min = 1, message = "O estado é obrigatório."))]
    #[schema(example = "SP")]
    pub state: String,

    #[validate(custom(function = "validate_area"))]
    #[schema(example = 10.0)]
    pub total_area: Decimal,

    #[validate(custom(function = "validate_area"))]
    #[schema(example = 5.0)]
    pub arable_area: Decimal,

    #[validate(custom(function = "validate_area"))]
    #[schema(example = 5.0)]
    pub vegetation_area: Decimal,

    #[validate(nested)]
    pub crops: Option<Vec<CropInput>>,

    #[validate(nested)]
    pub harvests: Option<Vec<HarvestInput>>,
}

impl FarmInput {
    // No PUT, filhos ausentes significam "não mexer".
    pub fn has_children(&self) -> bool {
        self.crops.is_some() || self.harvests.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProducerIdRef {
    #[schema(example = 1)]
    pub id: i32,
}

/// Corpo de POST/PUT /farms.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmPayload {
    #[serde(flatten)]
    #[validate(nested)]
    pub farm: FarmInput,

    // Obrigatório no POST; no PUT, ausente = mantém o dono atual.
    pub producer: Option<ProducerIdRef>,
}

// Fazenda pronta para persistir: sem ids, com a ligação cultura -> safra resolvida.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFarm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub total_area: Decimal,
    pub arable_area: Decimal,
    pub vegetation_area: Decimal,
    pub harvests: Vec<NewHarvest>,
    pub crops: Vec<NewCrop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeleteFarmResponse {
    #[schema(example = "Fazenda deletada com sucesso")]
    pub message: String,
}
