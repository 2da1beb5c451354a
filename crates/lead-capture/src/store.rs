//! Lead Storage
//!
//! One insert per form submission. No retry, no idempotency key: a store
//! either returns the inserted row or the error it hit.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{LeadError, Result};
use crate::model::Lead;

/// Lead storage trait
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Insert one lead and return the stored row
    async fn insert(&self, lead: Lead) -> Result<Lead>;

    /// Backend name for logs and health output
    fn name(&self) -> &str;
}

/// In-memory lead store (for development)
pub struct MemoryLeadStore {
    leads: RwLock<Vec<Lead>>,
}

impl Default for MemoryLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self {
            leads: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of everything inserted so far
    pub fn all(&self) -> Result<Vec<Lead>> {
        let leads = self
            .leads
            .read()
            .map_err(|e| LeadError::Storage(e.to_string()))?;
        Ok(leads.clone())
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn insert(&self, mut lead: Lead) -> Result<Lead> {
        lead.id = Some(Uuid::new_v4().into());
        lead.created_at = Some(Utc::now());

        let mut leads = self
            .leads
            .write()
            .map_err(|e| LeadError::Storage(e.to_string()))?;
        leads.push(lead.clone());

        Ok(lead)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LeadForm;
    use crate::utm::UtmParams;

    #[tokio::test]
    async fn test_memory_store_assigns_id_and_timestamp() {
        let store = MemoryLeadStore::new();
        let form = LeadForm {
            name: "João".into(),
            email: "joao@exemplo.com".into(),
            ..Default::default()
        };
        let lead = Lead::new(form, UtmParams::from_query("utm_medium=email")).unwrap();

        let stored = store.insert(lead).await.unwrap();
        assert!(stored.id.is_some());
        assert!(stored.created_at.is_some());
        assert_eq!(stored.utm.utm_medium.as_deref(), Some("email"));

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, stored.id);
    }
}
