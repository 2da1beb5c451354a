//! HTTP Handlers

use std::collections::HashMap;

use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use assistant_core::{
    AssistantError, ConversationMessage, PromptSuggestion, ToolCall, ToolResult, ToolSchema,
    indicators::default_tool_copy_table, suggestion::default_suggestions,
};
use assistant_tools::ASSISTANT_PROMPT;
use lead_capture::{Lead, LeadError, LeadForm, UtmParams};

use crate::sitemap::{render_robots, render_sitemap};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub lead_store: String,
    pub assistant_configured: bool,
    pub tools: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    #[serde(flatten)]
    pub form: LeadForm,
    #[serde(flatten)]
    pub utm: UtmParams,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct AssistantConfigResponse {
    pub prompt: &'static str,
    pub tools: Vec<ToolSchema>,
    pub suggestions: Vec<PromptSuggestion>,
    pub tool_loading_copy: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ConversationMessage>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        lead_store: state.leads.name().to_string(),
        assistant_configured: state.config.assistant_upstream_url.is_some(),
        tools: state.tools.len(),
    })
}

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.config.site_url, &state.sitemap),
    )
}

pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site_url),
    )
}

/// Store a contact-form lead
pub async fn create_lead(
    State(state): State<AppState>,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let lead = Lead::new(payload.form, payload.utm).map_err(|e| {
        api_error(StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), "INVALID_LEAD")
    })?;

    let stored = state.leads.insert(lead).await.map_err(|e| {
        tracing::error!("Lead insert failed: {}", e);
        match e {
            LeadError::Validation(_) => {
                api_error(StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), "INVALID_LEAD")
            }
            _ => api_error(StatusCode::BAD_GATEWAY, e.user_message(), "LEAD_STORE_ERROR"),
        }
    })?;

    tracing::info!(
        id = ?stored.id,
        utm_source = stored.utm.utm_source.as_deref().unwrap_or("-"),
        store = state.leads.name(),
        "lead captured"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Everything the hosted assistant runtime needs to drive the widget
pub async fn assistant_config(State(state): State<AppState>) -> Json<AssistantConfigResponse> {
    Json(AssistantConfigResponse {
        prompt: ASSISTANT_PROMPT,
        tools: state.tools.schemas(),
        suggestions: default_suggestions(),
        tool_loading_copy: default_tool_copy_table(),
    })
}

/// Execute one tool call on behalf of the hosted assistant runtime
pub async fn execute_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<ToolCallRequest>,
) -> Result<Json<ToolResult>, ApiError> {
    let call = ToolCall {
        name,
        arguments: payload.arguments,
        id: payload.id,
    };

    let result = state.tools.execute(&call).await.map_err(|e| {
        let status = match e {
            AssistantError::ToolNotFound(_) => StatusCode::NOT_FOUND,
            AssistantError::ToolValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(tool = %call.name, "Tool call failed: {}", e);
        api_error(status, e.user_message(), "TOOL_ERROR")
    })?;

    Ok(Json(result))
}

/// Relay the conversation to the hosted assistant runtime and stream its
/// newline-delimited message snapshots back unchanged
pub async fn chat_relay(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let upstream = state.config.assistant_upstream_url.as_deref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Assistant not configured",
            "ASSISTANT_DISABLED",
        )
    })?;

    let response = state
        .http
        .post(upstream)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Assistant upstream error: {}", e);
            api_error(StatusCode::BAD_GATEWAY, "Assistant unavailable", "ASSISTANT_ERROR")
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(status = status.as_u16(), "Assistant upstream rejected request");
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            format!("Assistant returned {status}"),
            "ASSISTANT_ERROR",
        ));
    }

    Ok((
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(response.bytes_stream()),
    )
        .into_response())
}
