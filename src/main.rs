//src/main.rs

use anyhow::Context;
use axum::{
    http::Method,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG tem prioridade; sem ele, nível info.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let db_pool = config.connect().await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&db_pool)
        .await
        .context("Falha ao rodar as migrações do banco de dados.")?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = create_router(AppState::new(db_pool));

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .context("Falha ao iniciar o listener TCP")?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    tracing::info!("📚 Documentação disponível em /api");

    axum::serve(listener, app).await.context("Erro no servidor Axum")?;
    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    let producer_routes = Router::new()
        .route(
            "/",
            get(handlers::producers::list_producers).post(handlers::producers::create_producer),
        )
        // Antes de /{id}, senão "dashboard" seria lido como id
        .route("/dashboard", get(handlers::producers::get_dashboard))
        .route(
            "/{id}",
            get(handlers::producers::get_producer)
                .put(handlers::producers::update_producer)
                .delete(handlers::producers::delete_producer),
        );

    let farm_routes = Router::new()
        .route(
            "/",
            get(handlers::farms::list_farms).post(handlers::farms::create_farm),
        )
        .route(
            "/{id}",
            get(handlers::farms::get_farm)
                .put(handlers::farms::update_farm)
                .delete(handlers::farms::delete_farm),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/producers", producer_routes)
        .nest("/farms", farm_routes)
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
