use crate::{
    data,
    modules::{dish::repository::Dish, order::repository::Order},
    utils::store::{InMemoryStore, Store},
};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub dishes: Arc<dyn Store<Dish>>,
    pub orders: Arc<dyn Store<Order>>,
}

impl Context {
    pub fn new(
        app: AppContext,
        dishes: Arc<dyn Store<Dish>>,
        orders: Arc<dyn Store<Order>>,
    ) -> Self {
        Self {
            app,
            dishes,
            orders,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed_enabled = env::var("SEED_DATA")
            .map(|raw| !matches!(raw.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self {
            app: AppConfig { host, port, url },
            seed: SeedConfig {
                enabled: seed_enabled,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let (dishes, orders) = match self.seed.enabled {
            true => (data::dishes(), data::orders()),
            false => (vec![], vec![]),
        };

        tracing::debug!(
            "Seeding stores with {} dishes and {} orders",
            dishes.len(),
            orders.len()
        );

        Context::new(
            AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            Arc::new(InMemoryStore::with_records(dishes)),
            Arc::new(InMemoryStore::with_records(orders)),
        )
    }
}
