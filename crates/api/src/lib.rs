//! # Deskbook API
//!
//! Web server for the deskbook office-presence booking service. It exposes
//! the booking collection, the month calendar that drives date picking, and
//! the admin surface (login, export, bulk purges, raw dump).
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Authentication and error handling
//! - **Config**: Environment configuration
//!
//! The API uses Axum as the web framework; persistence goes through the
//! ledger in `deskbook-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::Local;
use deskbook_core::holidays::HolidayCalendar;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use deskbook_db::ledger::Ledger;
use deskbook_db::store::{BookingStore, PgStore};

use crate::config::ApiConfig;

/// Shared application state, generic over the backing store so tests can
/// run the full router against the in-memory store.
pub struct ApiState<S: BookingStore> {
    pub ledger: Ledger<S>,
    pub holidays: HolidayCalendar,
    pub email_domain: String,
    pub admin_username: String,
    pub admin_password_hash: String,
    /// Active admin session tokens. Owned here; handlers only consult it
    /// through the auth middleware.
    pub sessions: Mutex<HashSet<String>>,
}

impl<S: BookingStore> ApiState<S> {
    pub fn new(
        ledger: Ledger<S>,
        holidays: HolidayCalendar,
        email_domain: String,
        admin_username: String,
        admin_password_hash: String,
    ) -> Self {
        Self {
            ledger,
            holidays,
            email_domain,
            admin_username,
            admin_password_hash,
            sessions: Mutex::new(HashSet::new()),
        }
    }

    pub fn session_is_active(&self, token: &str) -> bool {
        self.sessions
            .lock()
            .map(|sessions| sessions.contains(token))
            .unwrap_or(false)
    }
}

/// Builds the application router for any store implementation.
pub fn app<S: BookingStore + Send + Sync + 'static>(state: Arc<ApiState<S>>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking collection endpoints
        .merge(routes::booking::routes())
        // Calendar grid endpoints
        .merge(routes::calendar::routes())
        // Admin endpoints
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database
/// connection: initializes logging, runs the best-effort retention purge,
/// and serves until shutdown.
pub async fn start_server(config: ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let admin_password_hash = middleware::auth::hash_password(&config.admin_password)?;

    let ledger = Ledger::new(PgStore::new(db_pool));
    let state = Arc::new(ApiState::new(
        ledger,
        HolidayCalendar::current_year(),
        config.email_domain.clone(),
        config.admin_username.clone(),
        admin_password_hash,
    ));

    // Startup retention purge, best-effort: a failure is logged and must
    // never block the server from coming up.
    let today = Local::now().date_naive();
    let report = state.ledger.purge_expired(today).await;
    match report.failure {
        None => info!(
            "Startup retention purge removed {} expired bookings",
            report.removed
        ),
        Some(err) => warn!(
            "Startup retention purge failed after removing {}: {err:#}",
            report.removed
        ),
    }

    // Seed the snapshot channel so the first subscriber sees current data.
    if let Err(err) = state.ledger.publish().await {
        warn!("Could not publish initial snapshot: {err:#}");
    }

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::auth::ADMIN_TOKEN_HEADER),
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
