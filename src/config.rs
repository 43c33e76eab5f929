// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{FarmRepository, FarmStore, ProducerRepository, ProducerStore},
    services::{DashboardService, FarmService, ProducerService},
};

// Configuração lida do ambiente (.env é opcional)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        Ok(Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 3000)?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // Conecta ao banco de dados, usando '?' para propagar erros
    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(pool)
    }
}

// Variável ausente usa o padrão; presente mas malformada é erro de configuração.
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} inválida: {raw:?}")),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub producer_service: ProducerService,
    pub farm_service: FarmService,
    pub dashboard_service: DashboardService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        // --- Monta o gráfico de dependências ---
        let producers: Arc<dyn ProducerStore> = Arc::new(ProducerRepository::new(db_pool.clone()));
        let farms: Arc<dyn FarmStore> = Arc::new(FarmRepository::new(db_pool));

        Self::with_stores(producers, farms)
    }

    pub fn with_stores(producers: Arc<dyn ProducerStore>, farms: Arc<dyn FarmStore>) -> Self {
        Self {
            producer_service: ProducerService::new(producers.clone()),
            farm_service: FarmService::new(farms, producers.clone()),
            dashboard_service: DashboardService::new(producers),
            i18n_store: Arc::new(I18nStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        let port: u16 = parse_var("RURAL_TEST_SURELY_UNSET_PORT", 3000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn listen_addr_joins_host_and_port() {
        let config = Config {
            database_url: "postgres://localhost/rural_producer".into(),
            host: "127.0.0.1".into(),
            port: 8080,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(3),
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }
}
