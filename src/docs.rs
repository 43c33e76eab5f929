// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Produtores Rurais",
        version = "1.0",
        description = "Cadastro de produtores rurais, fazendas, safras e culturas"
    ),
    paths(
        // --- Producer ---
        handlers::producers::create_producer,
        handlers::producers::list_producers,
        handlers::producers::get_dashboard,
        handlers::producers::get_producer,
        handlers::producers::update_producer,
        handlers::producers::delete_producer,

        // --- Farms ---
        handlers::farms::create_farm,
        handlers::farms::list_farms,
        handlers::farms::get_farm,
        handlers::farms::update_farm,
        handlers::farms::delete_farm,
    ),
    components(
        schemas(
            // --- Producer ---
            models::producer::Producer,
            models::producer::ProducerRef,
            models::producer::ProducerPayload,

            // --- Farms ---
            models::farm::Farm,
            models::farm::FarmInput,
            models::farm::FarmPayload,
            models::farm::ProducerIdRef,
            models::farm::DeleteFarmResponse,

            // --- Safras e culturas ---
            models::harvest::Harvest,
            models::harvest::HarvestInput,
            models::harvest::HarvestCropName,
            models::crop::Crop,
            models::crop::CropInput,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::StateTotal,
            models::dashboard::LandUsageEntry,
            models::dashboard::CropTotal,
        )
    ),
    tags(
        (name = "Producer", description = "Produtores rurais e dashboard"),
        (name = "Farms", description = "Fazendas, com suas safras e culturas")
    )
)]
pub struct ApiDoc;
