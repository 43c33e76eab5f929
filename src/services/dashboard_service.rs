// src/services/dashboard_service.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::ProducerStore,
    models::{
        dashboard::{
            CropTotal, DashboardSummary, LandUsageEntry, StateTotal, LAND_USAGE_ARABLE,
            LAND_USAGE_VEGETATION,
        },
        producer::Producer,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    producers: Arc<dyn ProducerStore>,
}

impl DashboardService {
    pub fn new(producers: Arc<dyn ProducerStore>) -> Self {
        Self { producers }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary, AppError> {
        tracing::info!("Buscando dados do dashboard");

        let producers = self.producers.list().await?;
        Ok(summarize(&producers))
    }
}

/// Dobra produtores -> fazendas -> culturas nas estatísticas do dashboard.
/// Estados e culturas saem ordenados pelo nome.
pub fn summarize(producers: &[Producer]) -> DashboardSummary {
    let mut total_farms = 0;
    let mut total_hectares = Decimal::ZERO;
    let mut arable = Decimal::ZERO;
    let mut vegetation = Decimal::ZERO;
    let mut by_state: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_crop: BTreeMap<&str, usize> = BTreeMap::new();

    for farm in producers.iter().flat_map(|p| &p.farms) {
        total_farms += 1;
        total_hectares += farm.total_area;
        arable += farm.arable_area;
        vegetation += farm.vegetation_area;
        *by_state.entry(farm.state.as_str()).or_default() += 1;

        for crop in &farm.crops {
            *by_crop.entry(crop.name.as_str()).or_default() += 1;
        }
    }

    DashboardSummary {
        total_farms,
        total_hectares,
        farms_by_state: by_state
            .into_iter()
            .map(|(state, total)| StateTotal { state: state.to_string(), total })
            .collect(),
        land_usage: vec![
            LandUsageEntry { category: LAND_USAGE_ARABLE.to_string(), total: arable },
            LandUsageEntry { category: LAND_USAGE_VEGETATION.to_string(), total: vegetation },
        ],
        crops_distribution: by_crop
            .into_iter()
            .map(|(crop, total)| CropTotal { crop: crop.to_string(), total })
            .collect(),
    }
}
