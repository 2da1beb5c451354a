//! Site HTTP Server
//!
//! Serves the marketing site frontend, stores contact-form leads and
//! executes the scheduling tools for the hosted assistant.

mod app;
mod config;
mod gate;
mod handlers;
mod sitemap;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assistant_core::ToolRegistry;
use lead_capture::{LeadStore, MemoryLeadStore, RestLeadStore};

use crate::config::SiteConfig;
use crate::gate::RouteGate;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env();

    // Scheduling tools
    let mut tools = ToolRegistry::new();
    assistant_tools::register_all(&mut tools);

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    // Lead storage
    let leads: Arc<dyn LeadStore> = match RestLeadStore::from_env() {
        Ok(store) => {
            tracing::info!("✓ Lead table configured");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("⚠ {} - leads are kept in memory only", e);
            tracing::warn!("  Set SUPABASE_URL and SUPABASE_ANON_KEY in .env");
            Arc::new(MemoryLeadStore::new())
        }
    };

    if config.assistant_upstream_url.is_none() {
        tracing::warn!("⚠ ASSISTANT_UPSTREAM_URL not set - /api/chat disabled");
    }

    let addr = config.bind_addr.clone();
    let site_url = config.site_url.clone();

    let state = AppState {
        config: Arc::new(config),
        tools: Arc::new(tools),
        leads,
        gate: Arc::new(RouteGate::default()),
        sitemap: Arc::new(sitemap::default_entries()),
        http: reqwest::Client::new(),
    };

    let app = app::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 site server running on http://{} ({})", addr, site_url);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                      - Health check");
    tracing::info!("  GET  /sitemap.xml, /robots.txt    - SEO");
    tracing::info!("  POST /api/leads                   - Store contact lead");
    tracing::info!("  GET  /api/assistant/config        - Prompt, tools, suggestions");
    tracing::info!("  POST /api/assistant/tools/{{name}}  - Execute scheduling tool");
    tracing::info!("  POST /api/chat                    - Relay to hosted assistant");

    axum::serve(listener, app).await?;

    Ok(())
}
