// src/models/producer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::farm::{Farm, FarmInput, NewFarm};

// --- LEITURA ---

// Produtor como a API devolve: projeção enxuta, com as fazendas aninhadas.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "João da Silva")]
    pub name: String,
    #[schema(example = "52998224725")]
    pub cpf_cnpj: String,

    #[sqlx(skip)]
    pub farms: Vec<Farm>,
}

// Referência ao dono, usada dentro da listagem de fazendas
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerRef {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "João da Silva")]
    pub name: String,
    #[schema(example = "52998224725")]
    pub cpf_cnpj: String,
}

// --- ESCRITA ---

/// Corpo de POST/PUT /producers.
/// Ids enviados pelo cliente (no produtor ou nos filhos) não são lidos: o servidor sempre gera os seus.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerPayload {
    #[validate(length(min = 1, message = "O CPF/CNPJ é obrigatório."))]
    #[schema(example = "529.982.247-25")]
    pub cpf_cnpj: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "João da Silva")]
    pub name: String,

    // No PUT, ausente = mantém as fazendas atuais; presente = substitui todas.
    #[validate(nested)]
    pub farms: Option<Vec<FarmInput>>,
}

// O que efetivamente vai para o repositório, já sem ids e com o CPF/CNPJ normalizado.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProducer {
    pub cpf_cnpj: String,
    pub name: String,
    pub farms: Option<Vec<NewFarm>>,
}
