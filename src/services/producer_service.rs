// src/services/producer_service.rs

use std::sync::Arc;

use crate::{
    common::{
        cpf_cnpj::{is_valid_cpf_cnpj, only_digits},
        error::AppError,
    },
    db::ProducerStore,
    models::producer::{NewProducer, Producer, ProducerPayload},
    services::{association::build_new_farm, farm_service::validate_farm_input},
};

#[derive(Clone)]
pub struct ProducerService {
    store: Arc<dyn ProducerStore>,
}

impl ProducerService {
    pub fn new(store: Arc<dyn ProducerStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: ProducerPayload) -> Result<Producer, AppError> {
        tracing::info!(cpf_cnpj = %payload.cpf_cnpj, name = %payload.name, "Criando produtor");

        let producer = self.prepare(payload)?;

        if self.store.find_id_by_document(&producer.cpf_cnpj).await?.is_some() {
            tracing::warn!(cpf_cnpj = %producer.cpf_cnpj, "Produtor já cadastrado");
            return Err(AppError::ProducerAlreadyExists);
        }

        // O índice único ainda barra uma corrida entre a checagem e o insert.
        let id = self.store.insert(&producer).await?;

        self.find_one(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Producer>, AppError> {
        tracing::info!("Buscando todos os produtores");
        self.store.list().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Producer, AppError> {
        tracing::info!(id, "Buscando produtor");

        self.store.find(id).await?.ok_or_else(|| {
            tracing::warn!(id, "Produtor não encontrado");
            AppError::ProducerNotFound
        })
    }

    /// Substituição completa do produtor. `farms` ausente mantém as fazendas atuais.
    pub async fn update(&self, id: i32, payload: ProducerPayload) -> Result<Producer, AppError> {
        tracing::info!(id, "Atualizando produtor");

        if !self.store.exists(id).await? {
            tracing::warn!(id, "Produtor não encontrado");
            return Err(AppError::ProducerNotFound);
        }

        let producer = self.prepare(payload)?;

        if let Some(owner) = self.store.find_id_by_document(&producer.cpf_cnpj).await? {
            if owner != id {
                tracing::warn!(id, owner, "Produtor já cadastrado com esse CPF/CNPJ");
                return Err(AppError::ProducerAlreadyExists);
            }
        }

        if !self.store.replace(id, &producer).await? {
            return Err(AppError::ProducerNotFound);
        }

        self.find_one(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        tracing::info!(id, "Deletando produtor");

        if !self.store.delete(id).await? {
            tracing::warn!(id, "Produtor não encontrado");
            return Err(AppError::ProducerNotFound);
        }
        Ok(true)
    }

    // Valida documento e áreas das fazendas aninhadas e monta o grafo sem ids.
    fn prepare(&self, payload: ProducerPayload) -> Result<NewProducer, AppError> {
        if !is_valid_cpf_cnpj(&payload.cpf_cnpj) {
            tracing::warn!(cpf_cnpj = %payload.cpf_cnpj, "CPF/CNPJ inválido");
            return Err(AppError::InvalidDocument);
        }

        if let Some(farms) = &payload.farms {
            for farm in farms {
                validate_farm_input(farm)?;
            }
        }

        Ok(NewProducer {
            cpf_cnpj: only_digits(&payload.cpf_cnpj),
            name: payload.name,
            farms: payload
                .farms
                .map(|farms| farms.into_iter().map(build_new_farm).collect()),
        })
    }
}
