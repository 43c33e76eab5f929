// src/db/memory_repo.rs

// Implementação em memória dos stores, usada nos testes de serviço e de rotas.
// Reproduz o que o Postgres garante: ids sequenciais, CPF/CNPJ único e remoção em cascata.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{FarmStore, ProducerStore},
    models::{
        crop::Crop,
        farm::{Farm, NewFarm},
        harvest::Harvest,
        producer::{NewProducer, Producer, ProducerRef},
    },
};

struct ProducerRow {
    id: i32,
    cpf_cnpj: String,
    name: String,
}

struct FarmRow {
    id: i32,
    producer_id: i32,
    name: String,
    city: String,
    state: String,
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
}

struct HarvestRow {
    id: i32,
    farm_id: i32,
    year: i32,
}

struct CropRow {
    id: i32,
    farm_id: i32,
    harvest_id: Option<i32>,
    name: String,
    year: i32,
}

#[derive(Default)]
struct Tables {
    last_id: i32,
    producers: Vec<ProducerRow>,
    farms: Vec<FarmRow>,
    harvests: Vec<HarvestRow>,
    crops: Vec<CropRow>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn insert_farm(&mut self, producer_id: i32, farm: &NewFarm) -> i32 {
        let id = self.next_id();
        self.farms.push(FarmRow {
            id,
            producer_id,
            name: farm.name.clone(),
            city: farm.city.clone(),
            state: farm.state.clone(),
            total_area: farm.total_area,
            arable_area: farm.arable_area,
            vegetation_area: farm.vegetation_area,
        });
        self.insert_children(id, farm);
        id
    }

    fn insert_children(&mut self, farm_id: i32, farm: &NewFarm) {
        let mut harvest_ids = Vec::new();
        for harvest in &farm.harvests {
            let id = self.next_id();
            self.harvests.push(HarvestRow { id, farm_id, year: harvest.year });
            harvest_ids.push(id);
        }

        for crop in &farm.crops {
            let id = self.next_id();
            self.crops.push(CropRow {
                id,
                farm_id,
                harvest_id: crop.harvest.and_then(|i| harvest_ids.get(i).copied()),
                name: crop.name.clone(),
                year: crop.year,
            });
        }
    }

    fn delete_farm_children(&mut self, farm_id: i32) {
        self.crops.retain(|c| c.farm_id != farm_id);
        self.harvests.retain(|h| h.farm_id != farm_id);
    }

    fn delete_farm(&mut self, farm_id: i32) -> bool {
        let before = self.farms.len();
        self.farms.retain(|f| f.id != farm_id);
        self.delete_farm_children(farm_id);
        self.farms.len() != before
    }

    fn farm_view(&self, row: &FarmRow, with_producer: bool) -> Farm {
        let producer = if with_producer {
            self.producers.iter().find(|p| p.id == row.producer_id).map(|p| ProducerRef {
                id: p.id,
                name: p.name.clone(),
                cpf_cnpj: p.cpf_cnpj.clone(),
            })
        } else {
            None
        };

        Farm {
            id: row.id,
            name: row.name.clone(),
            city: row.city.clone(),
            state: row.state.clone(),
            total_area: row.total_area,
            arable_area: row.arable_area,
            vegetation_area: row.vegetation_area,
            producer_id: row.producer_id,
            producer,
            crops: self
                .crops
                .iter()
                .filter(|c| c.farm_id == row.id)
                .map(|c| Crop { id: c.id, name: c.name.clone(), year: c.year, farm_id: c.farm_id })
                .collect(),
            harvests: self
                .harvests
                .iter()
                .filter(|h| h.farm_id == row.id)
                .map(|h| Harvest { id: h.id, year: h.year, farm_id: h.farm_id })
                .collect(),
        }
    }

    fn producer_view(&self, row: &ProducerRow) -> Producer {
        Producer {
            id: row.id,
            name: row.name.clone(),
            cpf_cnpj: row.cpf_cnpj.clone(),
            farms: self
                .farms
                .iter()
                .filter(|f| f.producer_id == row.id)
                .map(|f| self.farm_view(f, false))
                .collect(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // Um teste que entrou em pânico segurando o lock não deve derrubar os outros.
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// (produtores, fazendas, safras, culturas)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let t = self.lock();
        (t.producers.len(), t.farms.len(), t.harvests.len(), t.crops.len())
    }

    /// Nome da cultura e ano da safra à qual ela ficou ligada.
    pub fn crop_links(&self) -> Vec<(String, Option<i32>)> {
        let t = self.lock();
        t.crops
            .iter()
            .map(|c| {
                let year = c
                    .harvest_id
                    .and_then(|hid| t.harvests.iter().find(|h| h.id == hid))
                    .map(|h| h.year);
                (c.name.clone(), year)
            })
            .collect()
    }
}

#[async_trait]
impl ProducerStore for MemoryStore {
    async fn find_id_by_document(&self, cpf_cnpj: &str) -> Result<Option<i32>, AppError> {
        Ok(self.lock().producers.iter().find(|p| p.cpf_cnpj == cpf_cnpj).map(|p| p.id))
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock().producers.iter().any(|p| p.id == id))
    }

    async fn insert(&self, producer: &NewProducer) -> Result<i32, AppError> {
        let mut t = self.lock();
        if t.producers.iter().any(|p| p.cpf_cnpj == producer.cpf_cnpj) {
            return Err(AppError::ProducerAlreadyExists);
        }

        let id = t.next_id();
        t.producers.push(ProducerRow {
            id,
            cpf_cnpj: producer.cpf_cnpj.clone(),
            name: producer.name.clone(),
        });
        for farm in producer.farms.iter().flatten() {
            t.insert_farm(id, farm);
        }
        Ok(id)
    }

    async fn replace(&self, id: i32, producer: &NewProducer) -> Result<bool, AppError> {
        let mut t = self.lock();
        if t.producers.iter().any(|p| p.cpf_cnpj == producer.cpf_cnpj && p.id != id) {
            return Err(AppError::ProducerAlreadyExists);
        }

        let Some(row) = t.producers.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        row.cpf_cnpj = producer.cpf_cnpj.clone();
        row.name = producer.name.clone();

        if let Some(farms) = &producer.farms {
            let old: Vec<i32> = t.farms.iter().filter(|f| f.producer_id == id).map(|f| f.id).collect();
            for farm_id in old {
                t.delete_farm(farm_id);
            }
            for farm in farms {
                t.insert_farm(id, farm);
            }
        }
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut t = self.lock();
        let before = t.producers.len();
        t.producers.retain(|p| p.id != id);
        if t.producers.len() == before {
            return Ok(false);
        }

        let farms: Vec<i32> = t.farms.iter().filter(|f| f.producer_id == id).map(|f| f.id).collect();
        for farm_id in farms {
            t.delete_farm(farm_id);
        }
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Producer>, AppError> {
        let t = self.lock();
        // ids crescem com o tempo: id decrescente = mais recente primeiro
        Ok(t.producers.iter().rev().map(|p| t.producer_view(p)).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Producer>, AppError> {
        let t = self.lock();
        Ok(t.producers.iter().find(|p| p.id == id).map(|p| t.producer_view(p)))
    }
}

#[async_trait]
impl FarmStore for MemoryStore {
    async fn insert(&self, producer_id: i32, farm: &NewFarm) -> Result<i32, AppError> {
        let mut t = self.lock();
        if !t.producers.iter().any(|p| p.id == producer_id) {
            return Err(AppError::ProducerNotFound);
        }
        Ok(t.insert_farm(producer_id, farm))
    }

    async fn replace(
        &self,
        id: i32,
        producer_id: i32,
        farm: &NewFarm,
        replace_children: bool,
    ) -> Result<bool, AppError> {
        let mut t = self.lock();
        if !t.producers.iter().any(|p| p.id == producer_id) {
            return Err(AppError::ProducerNotFound);
        }

        let Some(row) = t.farms.iter_mut().find(|f| f.id == id) else {
            return Ok(false);
        };
        row.producer_id = producer_id;
        row.name = farm.name.clone();
        row.city = farm.city.clone();
        row.state = farm.state.clone();
        row.total_area = farm.total_area;
        row.arable_area = farm.arable_area;
        row.vegetation_area = farm.vegetation_area;

        if replace_children {
            t.delete_farm_children(id);
            t.insert_children(id, farm);
        }
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock().delete_farm(id))
    }

    async fn list(&self) -> Result<Vec<Farm>, AppError> {
        let t = self.lock();
        Ok(t.farms.iter().rev().map(|f| t.farm_view(f, true)).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Farm>, AppError> {
        let t = self.lock();
        Ok(t.farms.iter().find(|f| f.id == id).map(|f| t.farm_view(f, true)))
    }

    async fn producer_of(&self, id: i32) -> Result<Option<i32>, AppError> {
        Ok(self.lock().farms.iter().find(|f| f.id == id).map(|f| f.producer_id))
    }
}
