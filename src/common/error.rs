use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// As três famílias de erro que a API expõe (mais "Internal" para falhas de infraestrutura).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    Internal,
}

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("CPF/CNPJ inválido")]
    InvalidDocument,

    #[error("Id inválido: {0}")]
    InvalidId(String),

    #[error("Soma das áreas agricultável e de vegetação ultrapassa a área total")]
    InvalidFarmArea,

    #[error("Produtor não encontrado")]
    ProducerNotFound,

    #[error("Fazenda não encontrada")]
    FarmNotFound,

    #[error("Produtor já cadastrado com esse CPF/CNPJ")]
    ProducerAlreadyExists,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidDocument
            | AppError::InvalidId(_)
            | AppError::InvalidFarmArea => ErrorKind::InvalidInput,
            AppError::ProducerNotFound | AppError::FarmNotFound => ErrorKind::NotFound,
            AppError::ProducerAlreadyExists => ErrorKind::Conflict,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => ErrorKind::Internal,
        }
    }

    // Chave da mensagem no catálogo de traduções
    fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation.invalid_fields",
            AppError::InvalidDocument => "producer.invalid_document",
            AppError::InvalidId(_) => "request.invalid_id",
            AppError::InvalidFarmArea => "farm.invalid_area",
            AppError::ProducerNotFound => "producer.not_found",
            AppError::FarmNotFound => "farm.not_found",
            AppError::ProducerAlreadyExists => "producer.already_exists",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "server.unexpected",
        }
    }

    /// Converte o erro de domínio na resposta HTTP, já traduzida.
    /// `action` é a chave da operação ("action.create_producer") usada como prefixo.
    pub fn to_api_error(self, locale: &Locale, i18n: &I18nStore, action: &str) -> ApiError {
        let status = match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => {
                // O detalhe fica no log, o cliente recebe só a mensagem genérica.
                tracing::error!("Erro Interno do Servidor: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let reason = i18n.translate(&locale.0, self.message_key());
        let message = format!("{}: {}", i18n.translate(&locale.0, action), reason);

        let details = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => Some(validation_details(errors)),
            _ => None,
        };

        ApiError { status, message, details }
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();
    collect_validation_messages(errors, String::new(), &mut details);
    json!(details)
}

// Payloads que embutem outro struct via #[serde(flatten)] (FarmPayload.farm).
const FLATTENED_FIELDS: &[&str] = &["farm"];

// "arable_area" -> "arableArea", como o cliente envia (rename_all = "camelCase").
fn json_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

// Achata os erros aninhados ("farms[0].crops[1].name") num mapa campo -> mensagens.
fn collect_validation_messages(
    errors: &validator::ValidationErrors,
    prefix: String,
    out: &mut HashMap<String, Vec<String>>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        // Campos achatados com #[serde(flatten)] não existem no JSON do cliente.
        let path = if FLATTENED_FIELDS.contains(&&**field) {
            prefix.clone()
        } else if prefix.is_empty() {
            json_field_name(field)
        } else {
            format!("{prefix}.{}", json_field_name(field))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(path, messages);
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_validation_messages(inner, path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_messages(inner, format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

// O erro que efetivamente sai pela borda HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
