// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

pub const LAND_USAGE_ARABLE: &str = "Area Agricultavel";
pub const LAND_USAGE_VEGETATION: &str = "Area de Vegetacao";

// Resumo exibido no dashboard (GET /producers/dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_farms: usize,
    pub total_hectares: Decimal,
    pub farms_by_state: Vec<StateTotal>,
    // Sempre duas entradas: agricultável e vegetação, nessa ordem
    pub land_usage: Vec<LandUsageEntry>,
    pub crops_distribution: Vec<CropTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StateTotal {
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = 2)]
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LandUsageEntry {
    #[schema(example = "Area Agricultavel")]
    pub category: String,
    #[schema(example = 60.0)]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CropTotal {
    #[schema(example = "Milho")]
    pub crop: String,
    #[schema(example = 3)]
    pub total: usize,
}
