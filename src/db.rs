pub mod farm_repo;
pub use farm_repo::FarmRepository;
pub mod producer_repo;
pub use producer_repo::ProducerRepository;

#[cfg(test)]
pub mod memory_repo;

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        farm::{Farm, NewFarm},
        producer::{NewProducer, Producer},
    },
};

// Contrato de persistência dos produtores. Os serviços só conhecem o trait,
// então a implementação Postgres pode ser trocada por uma em memória nos testes.
#[async_trait]
pub trait ProducerStore: Send + Sync {
    /// Id do produtor dono do CPF/CNPJ (já normalizado), se houver.
    async fn find_id_by_document(&self, cpf_cnpj: &str) -> Result<Option<i32>, AppError>;

    async fn exists(&self, id: i32) -> Result<bool, AppError>;

    /// Grava o produtor com fazendas, culturas e safras numa escrita só. Devolve o id gerado.
    async fn insert(&self, producer: &NewProducer) -> Result<i32, AppError>;

    /// Substitui os campos do produtor; com `farms = Some(..)` substitui também as fazendas.
    /// Devolve `false` se o id não existe.
    async fn replace(&self, id: i32, producer: &NewProducer) -> Result<bool, AppError>;

    /// Remove em cascata. Devolve `false` se o id não existe.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Todos os produtores, mais recentes primeiro, com fazendas/culturas/safras.
    async fn list(&self) -> Result<Vec<Producer>, AppError>;

    async fn find(&self, id: i32) -> Result<Option<Producer>, AppError>;
}

#[async_trait]
pub trait FarmStore: Send + Sync {
    async fn insert(&self, producer_id: i32, farm: &NewFarm) -> Result<i32, AppError>;

    /// Substitui os campos da fazenda (e o dono). Com `replace_children`
    /// as culturas e safras atuais são apagadas e as de `farm` inseridas.
    async fn replace(
        &self,
        id: i32,
        producer_id: i32,
        farm: &NewFarm,
        replace_children: bool,
    ) -> Result<bool, AppError>;

    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Todas as fazendas, mais recentes primeiro, com o dono e os filhos.
    async fn list(&self) -> Result<Vec<Farm>, AppError>;

    async fn find(&self, id: i32) -> Result<Option<Farm>, AppError>;

    async fn producer_of(&self, id: i32) -> Result<Option<i32>, AppError>;
}
