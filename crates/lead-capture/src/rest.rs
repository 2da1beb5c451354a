//! Hosted Table Store
//!
//! Inserts leads through the hosted database's REST interface
//! (`POST /rest/v1/{table}` with `Prefer: return=representation`).

use async_trait::async_trait;

use crate::error::{LeadError, Result};
use crate::model::Lead;
use crate::store::LeadStore;

/// Connection settings for the hosted table
#[derive(Clone, Debug)]
pub struct RestStoreConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,

    /// Public (anon) API key
    pub api_key: String,

    /// Table name
    pub table: String,
}

impl RestStoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| LeadError::Config("SUPABASE_URL not set".into()))?;
        let api_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| LeadError::Config("SUPABASE_ANON_KEY not set".into()))?;
        let table = std::env::var("LEADS_TABLE").unwrap_or_else(|_| "leads".into());

        Ok(Self { url, api_key, table })
    }

    /// Insert endpoint for the configured table
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

/// Lead store backed by the hosted table
pub struct RestLeadStore {
    client: reqwest::Client,
    config: RestStoreConfig,
}

impl RestLeadStore {
    pub fn new(config: RestStoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        RestStoreConfig::from_env().map(Self::new)
    }
}

#[async_trait]
impl LeadStore for RestLeadStore {
    async fn insert(&self, lead: Lead) -> Result<Lead> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(&[&lead])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "lead insert rejected");
            return Err(LeadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<Lead> = response.json().await?;
        rows.into_iter().next().ok_or(LeadError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        Router,
        http::{HeaderMap, StatusCode, header},
        routing::post,
    };
    use serde_json::{Value, json};

    use crate::model::{LeadForm, LeadId};
    use crate::utm::UtmParams;

    type Seen = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

    /// Serve `reply` with `status` on `/rest/v1/leads` and record each request
    async fn hosted_table(status: StatusCode, reply: Value) -> (RestLeadStore, Seen) {
        let seen: Seen = Arc::default();
        let recorder = seen.clone();

        let app = Router::new().route(
            "/rest/v1/leads",
            post(move |headers: HeaderMap, body: String| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
                    recorder.lock().unwrap().push((headers, body));
                    (status, [(header::CONTENT_TYPE, "application/json")], reply.to_string())
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let store = RestLeadStore::new(RestStoreConfig {
            url: format!("http://{addr}"),
            api_key: "anon-key".into(),
            table: "leads".into(),
        });
        (store, seen)
    }

    fn lead() -> Lead {
        let form = LeadForm {
            name: "Maria Souza".into(),
            email: "maria@loja.com.br".into(),
            ..Default::default()
        };
        Lead::new(form, UtmParams::from_query("utm_source=google&utm_campaign=outubro")).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = RestStoreConfig {
            url: "https://abc.supabase.co/".into(),
            api_key: "anon".into(),
            table: "leads".into(),
        };
        assert_eq!(config.endpoint(), "https://abc.supabase.co/rest/v1/leads");
    }

    #[tokio::test]
    async fn test_insert_returns_first_row() {
        let row = json!([{
            "id": 7,
            "name": "Maria Souza",
            "email": "maria@loja.com.br",
            "utm_source": "google",
            "utm_campaign": "outubro",
            "created_at": "2026-10-19T13:00:00+00:00"
        }]);
        let (store, seen) = hosted_table(StatusCode::CREATED, row).await;

        let stored = store.insert(lead()).await.unwrap();
        assert_eq!(stored.id, Some(LeadId::Number(7)));
        assert!(stored.created_at.is_some());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (headers, body) = &seen[0];
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[header::AUTHORIZATION], "Bearer anon-key");
        assert_eq!(headers["prefer"], "return=representation");

        // one-row array, flat columns, no id of our own
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["email"], "maria@loja.com.br");
        assert_eq!(rows[0]["utm_campaign"], "outubro");
        assert!(rows[0].get("id").is_none());
    }

    #[tokio::test]
    async fn test_insert_rejected() {
        let (store, _) = hosted_table(
            StatusCode::CONFLICT,
            json!({ "message": "duplicate key value violates unique constraint" }),
        )
        .await;

        match store.insert(lead()).await {
            Err(LeadError::Rejected { status, body }) => {
                assert_eq!(status, 409);
                assert!(body.contains("duplicate key"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_empty_response() {
        let (store, _) = hosted_table(StatusCode::CREATED, json!([])).await;

        assert!(matches!(store.insert(lead()).await, Err(LeadError::EmptyResponse)));
    }
}
