//! Application State

use std::sync::Arc;

use assistant_core::ToolRegistry;
use lead_capture::LeadStore;

use crate::config::SiteConfig;
use crate::gate::RouteGate;
use crate::sitemap::SitemapEntry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,

    /// Tools the hosted assistant may call
    pub tools: Arc<ToolRegistry>,

    /// Where contact-form leads go (hosted table, or memory in development)
    pub leads: Arc<dyn LeadStore>,

    pub gate: Arc<RouteGate>,

    pub sitemap: Arc<Vec<SitemapEntry>>,

    /// Client for the assistant relay
    pub http: reqwest::Client,
}
