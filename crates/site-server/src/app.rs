//! Router assembly

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::gate;
use crate::handlers::{
    assistant_config, chat_relay, create_lead, execute_tool, health_check, robots_txt,
    sitemap_xml,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Client-side routes all resolve to the SPA shell
    let static_dir = Path::new(&state.config.static_dir);
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & SEO
        .route("/health", get(health_check))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        // Leads
        .route("/api/leads", post(create_lead))
        // Assistant
        .route("/api/assistant/config", get(assistant_config))
        .route("/api/assistant/tools/{name}", post(execute_tool))
        .route("/api/chat", post(chat_relay))
        // Static files (WASM frontend)
        .fallback_service(frontend)
        .layer(middleware::from_fn_with_state(state.clone(), gate::route_gate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
