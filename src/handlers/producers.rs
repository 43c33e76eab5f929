// src/handlers/producers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        id::parse_id,
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{
        dashboard::DashboardSummary,
        producer::{Producer, ProducerPayload},
    },
};

// POST /producers
#[utoipa::path(
    post,
    path = "/producers",
    tag = "Producer",
    request_body(content = ProducerPayload, description = "Dados do produtor rural"),
    responses(
        (status = 200, description = "Retornado o produtor rural que foi criado", body = Producer),
        (status = 400, description = "Erro ao criar o produtor rural"),
        (status = 409, description = "CPF/CNPJ já cadastrado"),
        (status = 500, description = "Erro interno no servidor")
    )
)]
pub async fn create_producer(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<ProducerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.create_producer";

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let producer = app_state
        .producer_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(producer)))
}

// GET /producers/dashboard
#[utoipa::path(
    get,
    path = "/producers/dashboard",
    tag = "Producer",
    responses(
        (status = 200, description = "Retornado os dados do dashboard", body = DashboardSummary),
        (status = 500, description = "Erro interno no servidor")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .dashboard_service
        .get_summary()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, "action.dashboard"))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /producers
#[utoipa::path(
    get,
    path = "/producers",
    tag = "Producer",
    responses(
        (status = 200, description = "Retorna a lista de produtores rurais", body = Vec<Producer>),
        (status = 500, description = "Erro interno no servidor")
    )
)]
pub async fn list_producers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let producers = app_state
        .producer_service
        .find_all()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, "action.list_producers"))?;

    Ok((StatusCode::OK, Json(producers)))
}

// GET /producers/{id}
#[utoipa::path(
    get,
    path = "/producers/{id}",
    tag = "Producer",
    params(
        ("id" = i32, Path, description = "Id do produtor rural")
    ),
    responses(
        (status = 200, description = "Retornado o produtor rural especifico pelo id", body = Producer),
        (status = 400, description = "Id inválido"),
        (status = 404, description = "Produtor rural não encontrado")
    )
)]
pub async fn get_producer(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.find_producer";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let producer = app_state
        .producer_service
        .find_one(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(producer)))
}

// PUT /producers/{id}
#[utoipa::path(
    put,
    path = "/producers/{id}",
    tag = "Producer",
    params(
        ("id" = i32, Path, description = "Id do produtor rural")
    ),
    request_body(content = ProducerPayload, description = "Dados do produtor rural"),
    responses(
        (status = 200, description = "Atualizado o produtor rural especifico pelo id", body = Producer),
        (status = 400, description = "Erro ao atualizar o produtor rural pelo id"),
        (status = 404, description = "Produtor rural não encontrado"),
        (status = 409, description = "CPF/CNPJ já cadastrado para outro produtor")
    )
)]
pub async fn update_producer(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    Json(payload): Json<ProducerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.update_producer";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let producer = app_state
        .producer_service
        .update(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(producer)))
}

// DELETE /producers/{id}
#[utoipa::path(
    delete,
    path = "/producers/{id}",
    tag = "Producer",
    params(
        ("id" = i32, Path, description = "Id do produtor rural")
    ),
    responses(
        (status = 200, description = "Deletado o produtor rural especifico pelo id", body = bool),
        (status = 400, description = "Id inválido"),
        (status = 404, description = "Produtor rural não encontrado")
    )
)]
pub async fn delete_producer(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.delete_producer";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let deleted = app_state
        .producer_service
        .delete(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(deleted)))
}
