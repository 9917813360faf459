mod docs;
mod error;
mod history;
mod routes;
mod state;

use std::sync::Arc;

use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Extension, serve};
use parking_lot::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::docs::docs_routes;
use crate::history::RouteHistory;
use crate::routes::calculate::calculate_route_handler;
use crate::routes::health::{health_handler, root_handler};
use crate::routes::history::{add_route_handler, clear_history_handler, list_history_handler};
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let state = Arc::new(AppState {
        history: RwLock::new(RouteHistory::default()),
    });

    // The sketch frontend runs on its own origin
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/calculate-route", post(calculate_route_handler))
        .route("/add-route", post(add_route_handler))
        .route(
            "/history",
            get(list_history_handler).delete(clear_history_handler),
        )
        .finish_api_with(&mut api, api_docs);

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
    info!("listening on {}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Detour Open API")
}
