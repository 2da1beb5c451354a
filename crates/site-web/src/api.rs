//! API Client

use serde::Serialize;

use assistant_core::ConversationMessage;
use lead_capture::{Lead, LeadForm, UtmParams};

/// Page origin; the browser client needs absolute URLs
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    let data: serde_json::Value = response.json().await.unwrap_or_default();
    data["error"].as_str().unwrap_or(fallback).to_string()
}

/// UTM parameters of the page the visitor is on
pub fn current_utm() -> UtmParams {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|query| UtmParams::from_query(&query))
        .unwrap_or_default()
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ConversationMessage],
}

/// Post the conversation and return the streaming snapshot response
pub async fn stream_chat(messages: &[ConversationMessage]) -> Result<reqwest::Response, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/chat"))
        .json(&ChatRequest { messages })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_message(response, "Assistente indisponível").await)
    }
}

#[derive(Serialize)]
struct LeadRequest<'a> {
    #[serde(flatten)]
    form: &'a LeadForm,
    #[serde(flatten)]
    utm: &'a UtmParams,
}

/// Submit the contact form
pub async fn create_lead(form: &LeadForm, utm: &UtmParams) -> Result<Lead, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/leads"))
        .json(&LeadRequest { form, utm })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response, "Não foi possível enviar o formulário").await)
    }
}
