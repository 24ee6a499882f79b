use aggregation::{AggregationEngine, MemoryStore, RecordStore};
use axum::{routing::get, Router};
use configuration::{Settings, StoreKind};
use database::DbRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState<S> {
    pub engine: AggregationEngine<S>,
}

/// Builds the application routes around an engine over any record store.
pub fn router<S>(engine: AggregationEngine<S>) -> Router
where
    S: RecordStore + 'static,
{
    let app_state = Arc::new(AppState { engine });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/countries", get(handlers::get_countries::<S>))
        .route("/countries/:country", get(handlers::get_country_details::<S>))
        .route("/countries/:country/medals", get(handlers::get_country_medals::<S>))
        .with_state(app_state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves `router(engine)` on `addr` until the process is stopped.
pub async fn serve<S>(addr: SocketAddr, engine: AggregationEngine<S>) -> anyhow::Result<()>
where
    S: RecordStore + 'static,
{
    let app = router(engine);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Opens the configured record store and runs the web server.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr();

    match settings.store.kind {
        StoreKind::Postgres => {
            let db_pool = database::connect(&settings.database).await?;
            database::run_migrations(&db_pool).await?;
            serve(addr, AggregationEngine::new(DbRepository::new(db_pool))).await
        }
        StoreKind::Fixture => {
            let path = settings
                .store
                .fixture_path
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("store.fixture_path is not set"))?;
            let store = MemoryStore::from_json_file(path)?;
            serve(addr, AggregationEngine::new(store)).await
        }
    }
}
