//! Web API module for taskdeck

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::state::AppState;

/// Create the API router
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::welcome))
        // Tasks API
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .with_state(state)
}

/// Create the full router with request tracing and CORS
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the web server
pub async fn start_server(port: u16, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("taskdeck API: http://localhost:{}", port);

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}
