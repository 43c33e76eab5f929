// src/db/producer_repo.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{
        farm_repo::{attach_farm_children, insert_farm_graph},
        ProducerStore,
    },
    models::{farm::Farm, producer::{NewProducer, Producer}},
};

// O repositório de produtores. Fazendas, culturas e safras entram junto nas escritas aninhadas.
#[derive(Clone)]
pub struct ProducerRepository {
    pool: PgPool,
}

impl ProducerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Preenche `farms` (e netos) dos produtores já carregados.
    async fn attach_farms(&self, producers: &mut [Producer]) -> Result<(), AppError> {
        if producers.is_empty() {
            return Ok(());
        }

        let producer_ids: Vec<i32> = producers.iter().map(|p| p.id).collect();

        let mut farms = sqlx::query_as::<_, Farm>(
            r#"
            SELECT id, name, city, state, total_area, arable_area, vegetation_area, producer_id
            FROM farms
            WHERE producer_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&producer_ids)
        .fetch_all(&self.pool)
        .await?;

        attach_farm_children(&self.pool, &mut farms).await?;

        let mut farms_by_producer: HashMap<i32, Vec<Farm>> = HashMap::new();
        for farm in farms {
            farms_by_producer.entry(farm.producer_id).or_default().push(farm);
        }

        for producer in producers.iter_mut() {
            producer.farms = farms_by_producer.remove(&producer.id).unwrap_or_default();
        }

        Ok(())
    }
}

#[async_trait]
impl ProducerStore for ProducerRepository {
    async fn find_id_by_document(&self, cpf_cnpj: &str) -> Result<Option<i32>, AppError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT id FROM producers WHERE cpf_cnpj = $1")
            .bind(cpf_cnpj)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM producers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn insert(&self, producer: &NewProducer) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        let producer_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO producers (cpf_cnpj, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(&producer.cpf_cnpj)
        .bind(&producer.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_duplicate_document)?;

        for farm in producer.farms.iter().flatten() {
            insert_farm_graph(&mut tx, producer_id, farm).await?;
        }

        tx.commit().await?;
        Ok(producer_id)
    }

    async fn replace(&self, id: i32, producer: &NewProducer) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE producers SET cpf_cnpj = $1, name = $2, updated_at = now() WHERE id = $3",
        )
        .bind(&producer.cpf_cnpj)
        .bind(&producer.name)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_duplicate_document)?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        if let Some(farms) = &producer.farms {
            sqlx::query("DELETE FROM farms WHERE producer_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for farm in farms {
                insert_farm_graph(&mut tx, id, farm).await?;
            }
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        // farms -> crops/harvests caem em cascata
        let result = sqlx::query("DELETE FROM producers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Producer>, AppError> {
        let mut producers = sqlx::query_as::<_, Producer>(
            "SELECT id, name, cpf_cnpj FROM producers ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        self.attach_farms(&mut producers).await?;
        Ok(producers)
    }

    async fn find(&self, id: i32) -> Result<Option<Producer>, AppError> {
        let producer = sqlx::query_as::<_, Producer>(
            "SELECT id, name, cpf_cnpj FROM producers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(producer) = producer else {
            return Ok(None);
        };

        let mut producers = vec![producer];
        self.attach_farms(&mut producers).await?;
        Ok(producers.pop())
    }
}

// Converte erro de violação de chave única em um erro mais amigável
fn map_duplicate_document(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::ProducerAlreadyExists;
        }
    }
    e.into()
}
