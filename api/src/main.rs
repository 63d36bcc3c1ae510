//! Lot desk API server
//!
//! CRUD backend for customers and the sale lots they place.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresCustomerRepository, PostgresLotRepository};
use app::{CustomerService, LotService};
use config::Config;
use domain::ports::{CustomerRepository, LotRepository};

/// Application state shared across all handlers
pub struct AppState<CR, LR>
where
    CR: CustomerRepository,
    LR: LotRepository,
{
    pub customer_service: Arc<CustomerService<CR>>,
    pub lot_service: Arc<LotService<LR>>,
}

// derive(Clone) would require the repositories themselves to be Clone
impl<CR, LR> Clone for AppState<CR, LR>
where
    CR: CustomerRepository,
    LR: LotRepository,
{
    fn clone(&self) -> Self {
        Self {
            customer_service: self.customer_service.clone(),
            lot_service: self.lot_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes and middleware over any repository pair
pub fn build_router<CR, LR>(state: AppState<CR, LR>) -> Router
where
    CR: CustomerRepository + 'static,
    LR: LotRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Customers
        .route(
            "/api/customers",
            get(handlers::list_customers::<CR, LR>).post(handlers::create_customer::<CR, LR>),
        )
        .route(
            "/api/customers/:code",
            get(handlers::get_customer::<CR, LR>)
                .put(handlers::update_customer::<CR, LR>)
                .delete(handlers::delete_customer::<CR, LR>),
        )
        // Lots
        .route(
            "/api/lots",
            get(handlers::list_lots::<CR, LR>).post(handlers::create_lot::<CR, LR>),
        )
        .route(
            "/api/lots/:id",
            get(handlers::get_lot::<CR, LR>)
                .put(handlers::update_lot::<CR, LR>)
                .delete(handlers::delete_lot::<CR, LR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lotdesk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting lot desk API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.apply_schema {
        adapters::postgres::apply_schema(&db)
            .await
            .context("Failed to apply schema")?;
    }

    // Create adapters
    let customer_repo = Arc::new(PostgresCustomerRepository::new(db.clone()));
    let lot_repo = Arc::new(PostgresLotRepository::new(db.clone()));

    // Create application services
    let customer_service = Arc::new(CustomerService::new(customer_repo));
    let lot_service = Arc::new(LotService::new(lot_repo));

    let state = AppState {
        customer_service,
        lot_service,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
