// src/handlers/farms.rs

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
    models::farm::{DeleteFarmResponse, Farm, FarmPayload},
};

// POST /farms
#[utoipa::path(
    post,
    path = "/farms",
    tag = "Farms",
    request_body(content = FarmPayload, description = "Dados da fazenda"),
    responses(
        (status = 200, description = "Retornado com sucesso a fazenda criada", body = Farm),
        (status = 400, description = "Erro na criação da fazenda"),
        (status = 404, description = "Produtor não encontrado")
    )
)]
pub async fn create_farm(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<FarmPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.create_farm";

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let farm = app_state
        .farm_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(farm)))
}

// GET /farms
#[utoipa::path(
    get,
    path = "/farms",
    tag = "Farms",
    responses(
        (status = 200, description = "Retornado com sucesso as fazendas", body = Vec<Farm>),
        (status = 500, description = "Erro interno no servidor")
    )
)]
pub async fn list_farms(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let farms = app_state
        .farm_service
        .find_all()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, "action.list_farms"))?;

    Ok((StatusCode::OK, Json(farms)))
}

// GET /farms/{id}
#[utoipa::path(
    get,
    path = "/farms/{id}",
    tag = "Farms",
    params(
        ("id" = i32, Path, description = "ID da fazenda")
    ),
    responses(
        (status = 200, description = "Retornado com sucesso a fazenda", body = Farm),
        (status = 400, description = "Id inválido"),
        (status = 404, description = "Fazenda nao encontrada")
    )
)]
pub async fn get_farm(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.find_farm";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let farm = app_state
        .farm_service
        .find_one(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(farm)))
}

// PUT /farms/{id}
#[utoipa::path(
    put,
    path = "/farms/{id}",
    tag = "Farms",
    params(
        ("id" = i32, Path, description = "ID da fazenda")
    ),
    request_body(content = FarmPayload, description = "Dados da fazenda"),
    responses(
        (status = 200, description = "Retornado com sucesso a fazenda", body = Farm),
        (status = 400, description = "Erro ao atualizar a fazenda"),
        (status = 404, description = "Fazenda nao encontrada")
    )
)]
pub async fn update_farm(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    Json(payload): Json<FarmPayload>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.update_farm";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let farm = app_state
        .farm_service
        .update(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    Ok((StatusCode::OK, Json(farm)))
}

// DELETE /farms/{id}
#[utoipa::path(
    delete,
    path = "/farms/{id}",
    tag = "Farms",
    params(
        ("id" = i32, Path, description = "ID da fazenda")
    ),
    responses(
        (status = 200, description = "Fazenda deletada", body = DeleteFarmResponse),
        (status = 400, description = "Erro ao deletar a fazenda"),
        (status = 404, description = "Fazenda nao encontrada")
    )
)]
pub async fn delete_farm(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "action.delete_farm";

    let id = parse_id(&id).map_err(|e| e.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    app_state
        .farm_service
        .delete(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store, ACTION))?;

    let message = app_state.i18n_store.translate(&locale.0, "farm.deleted");
    Ok((StatusCode::OK, Json(DeleteFarmResponse { message })))
}
