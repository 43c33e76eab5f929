// src/db/farm_repo.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::{
    common::error::AppError,
    db::FarmStore,
    models::{
        crop::Crop,
        farm::{Farm, NewFarm},
        harvest::Harvest,
        producer::ProducerRef,
    },
};

const FARM_WITH_PRODUCER_SELECT: &str = r#"
    SELECT
        f.id, f.name, f.city, f.state,
        f.total_area, f.arable_area, f.vegetation_area, f.producer_id,
        p.name AS producer_name, p.cpf_cnpj AS producer_cpf_cnpj
    FROM farms f
    JOIN producers p ON p.id = f.producer_id
"#;

// Linha do JOIN fazenda + dono
#[derive(FromRow)]
struct FarmWithProducerRow {
    #[sqlx(flatten)]
    farm: Farm,
    producer_name: String,
    producer_cpf_cnpj: String,
}

impl From<FarmWithProducerRow> for Farm {
    fn from(row: FarmWithProducerRow) -> Self {
        let mut farm = row.farm;
        farm.producer = Some(ProducerRef {
            id: farm.producer_id,
            name: row.producer_name,
            cpf_cnpj: row.producer_cpf_cnpj,
        });
        farm
    }
}

// O repositório de fazendas, responsável pelas tabelas 'farms', 'crops' e 'harvests'
#[derive(Clone)]
pub struct FarmRepository {
    pool: PgPool,
}

impl FarmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FarmStore for FarmRepository {
    async fn insert(&self, producer_id: i32, farm: &NewFarm) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let id = insert_farm_graph(&mut tx, producer_id, farm).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn replace(
        &self,
        id: i32,
        producer_id: i32,
        farm: &NewFarm,
        replace_children: bool,
    ) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE farms
            SET name = $1, city = $2, state = $3,
                total_area = $4, arable_area = $5, vegetation_area = $6,
                producer_id = $7, updated_at = now()
            WHERE id = $8
            "#,
        )
        .bind(&farm.name)
        .bind(&farm.city)
        .bind(&farm.state)
        .bind(farm.total_area)
        .bind(farm.arable_area)
        .bind(farm.vegetation_area)
        .bind(producer_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_missing_producer)?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        if replace_children {
            // Culturas primeiro: elas apontam para as safras
            sqlx::query("DELETE FROM crops WHERE farm_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM harvests WHERE farm_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_farm_children(&mut tx, id, farm).await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        // crops e harvests saem junto (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM farms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Farm>, AppError> {
        let sql = format!("{FARM_WITH_PRODUCER_SELECT} ORDER BY f.created_at DESC, f.id DESC");
        let rows = sqlx::query_as::<_, FarmWithProducerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        let mut farms: Vec<Farm> = rows.into_iter().map(Farm::from).collect();
        attach_farm_children(&self.pool, &mut farms).await?;
        Ok(farms)
    }

    async fn find(&self, id: i32) -> Result<Option<Farm>, AppError> {
        let sql = format!("{FARM_WITH_PRODUCER_SELECT} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FarmWithProducerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut farms = vec![Farm::from(row)];
        attach_farm_children(&self.pool, &mut farms).await?;
        Ok(farms.pop())
    }

    async fn producer_of(&self, id: i32) -> Result<Option<i32>, AppError> {
        let producer_id = sqlx::query_scalar::<_, i32>("SELECT producer_id FROM farms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(producer_id)
    }
}

// ---
// Helpers compartilhados com o repositório de produtores
// ---

/// Insere a fazenda e os filhos dentro da transação do chamador.
pub(crate) async fn insert_farm_graph(
    conn: &mut PgConnection,
    producer_id: i32,
    farm: &NewFarm,
) -> Result<i32, AppError> {
    let farm_id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO farms (producer_id, name, city, state, total_area, arable_area, vegetation_area)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(producer_id)
    .bind(&farm.name)
    .bind(&farm.city)
    .bind(&farm.state)
    .bind(farm.total_area)
    .bind(farm.arable_area)
    .bind(farm.vegetation_area)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_missing_producer)?;

    insert_farm_children(conn, farm_id, farm).await?;

    Ok(farm_id)
}

// Safras primeiro, para que as culturas já tenham o id da safra casada.
async fn insert_farm_children(
    conn: &mut PgConnection,
    farm_id: i32,
    farm: &NewFarm,
) -> Result<(), AppError> {
    let mut harvest_ids = Vec::with_capacity(farm.harvests.len());

    for harvest in &farm.harvests {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO harvests (farm_id, year) VALUES ($1, $2) RETURNING id",
        )
        .bind(farm_id)
        .bind(harvest.year)
        .fetch_one(&mut *conn)
        .await?;
        harvest_ids.push(id);
    }

    for crop in &farm.crops {
        let harvest_id = crop.harvest.and_then(|index| harvest_ids.get(index).copied());

        sqlx::query("INSERT INTO crops (farm_id, harvest_id, name, year) VALUES ($1, $2, $3, $4)")
            .bind(farm_id)
            .bind(harvest_id)
            .bind(&crop.name)
            .bind(crop.year)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Carrega culturas e safras de várias fazendas com duas consultas e distribui por fazenda.
pub(crate) async fn attach_farm_children(pool: &PgPool, farms: &mut [Farm]) -> Result<(), AppError> {
    if farms.is_empty() {
        return Ok(());
    }

    let farm_ids: Vec<i32> = farms.iter().map(|f| f.id).collect();

    let crops = sqlx::query_as::<_, Crop>(
        "SELECT id, name, year, farm_id FROM crops WHERE farm_id = ANY($1) ORDER BY id",
    )
    .bind(&farm_ids)
    .fetch_all(pool)
    .await?;

    let harvests = sqlx::query_as::<_, Harvest>(
        "SELECT id, year, farm_id FROM harvests WHERE farm_id = ANY($1) ORDER BY id",
    )
    .bind(&farm_ids)
    .fetch_all(pool)
    .await?;

    let mut crops_by_farm: HashMap<i32, Vec<Crop>> = HashMap::new();
    for crop in crops {
        crops_by_farm.entry(crop.farm_id).or_default().push(crop);
    }

    let mut harvests_by_farm: HashMap<i32, Vec<Harvest>> = HashMap::new();
    for harvest in harvests {
        harvests_by_farm.entry(harvest.farm_id).or_default().push(harvest);
    }

    for farm in farms.iter_mut() {
        farm.crops = crops_by_farm.remove(&farm.id).unwrap_or_default();
        farm.harvests = harvests_by_farm.remove(&farm.id).unwrap_or_default();
    }

    Ok(())
}

// O produtor pode ter sido removido entre a checagem do serviço e a escrita.
fn map_missing_producer(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return AppError::ProducerNotFound;
        }
    }
    e.into()
}
