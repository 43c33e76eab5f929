// src/services/farm_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{FarmStore, ProducerStore},
    models::farm::{Farm, FarmInput, FarmPayload},
    services::association::build_new_farm,
};

/// Agricultável + vegetação nunca pode passar da área total.
/// Só é checado na escrita; o banco não tem essa restrição.
pub fn validate_farm_areas(
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
) -> Result<(), AppError> {
    if arable_area + vegetation_area > total_area {
        return Err(AppError::InvalidFarmArea);
    }
    Ok(())
}

pub(crate) fn validate_farm_input(farm: &FarmInput) -> Result<(), AppError> {
    validate_farm_areas(farm.total_area, farm.arable_area, farm.vegetation_area)
}

#[derive(Clone)]
pub struct FarmService {
    farms: Arc<dyn FarmStore>,
    producers: Arc<dyn ProducerStore>,
}

impl FarmService {
    pub fn new(farms: Arc<dyn FarmStore>, producers: Arc<dyn ProducerStore>) -> Self {
        Self { farms, producers }
    }

    pub async fn create(&self, payload: FarmPayload) -> Result<Farm, AppError> {
        tracing::info!("Validando as informações da fazenda");
        validate_farm_input(&payload.farm).inspect_err(|_| {
            tracing::warn!(farm = %payload.farm.name, "Áreas da fazenda inconsistentes");
        })?;

        tracing::info!(farm = %payload.farm.name, "Criando fazenda");

        let producer_id = match payload.producer {
            Some(producer) => producer.id,
            None => {
                tracing::warn!("Fazenda sem produtor");
                return Err(AppError::ProducerNotFound);
            }
        };

        if !self.producers.exists(producer_id).await? {
            tracing::warn!(producer_id, "Produtor não encontrado");
            return Err(AppError::ProducerNotFound);
        }

        let farm = build_new_farm(payload.farm);
        let id = self.farms.insert(producer_id, &farm).await?;

        self.find_one(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Farm>, AppError> {
        tracing::info!("Buscando todas as fazendas");
        self.farms.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Farm, AppError> {
        tracing::info!(id, "Buscando fazenda");

        self.farms.find(id).await?.ok_or_else(|| {
            tracing::warn!(id, "Fazenda não encontrada");
            AppError::FarmNotFound
        })
    }

    /// Substituição completa. Sem `producer` no payload, mantém o dono atual;
    /// sem `crops`/`harvests`, mantém os filhos atuais.
    pub async fn update(&self, id: i32, payload: FarmPayload) -> Result<Farm, AppError> {
        tracing::info!("Validando as informações da fazenda");
        validate_farm_input(&payload.farm)?;

        tracing::info!(id, "Atualizando fazenda");

        let Some(current_owner) = self.farms.producer_of(id).await? else {
            tracing::warn!(id, "Fazenda não encontrada");
            return Err(AppError::FarmNotFound);
        };

        let producer_id = match payload.producer {
            Some(producer) if producer.id != current_owner => {
                if !self.producers.exists(producer.id).await? {
                    tracing::warn!(producer_id = producer.id, "Produtor não encontrado");
                    return Err(AppError::ProducerNotFound);
                }
                producer.id
            }
            _ => current_owner,
        };

        let replace_children = payload.farm.has_children();
        let farm = build_new_farm(payload.farm);

        if !self.farms.replace(id, producer_id, &farm, replace_children).await? {
            return Err(AppError::FarmNotFound);
        }

        self.find_one(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::info!(id, "Deletando fazenda");

        if !self.farms.delete(id).await? {
            tracing::warn!(id, "Fazenda não encontrada");
            return Err(AppError::FarmNotFound);
        }
        Ok(())
    }
}
