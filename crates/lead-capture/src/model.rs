//! Lead Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LeadError, Result};
use crate::utm::UtmParams;

/// Fields a visitor fills in on the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Monthly conversation volume bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Row id assigned by the store. Hosted tables use either a bigint identity
/// or a uuid column, so both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadId {
    Number(i64),
    Text(String),
}

impl From<Uuid> for LeadId {
    fn from(id: Uuid) -> Self {
        LeadId::Text(id.to_string())
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadId::Number(n) => write!(f, "{n}"),
            LeadId::Text(s) => f.write_str(s),
        }
    }
}

/// A lead row as stored in the hosted table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LeadId>,

    #[serde(flatten)]
    pub form: LeadForm,

    #[serde(flatten)]
    pub utm: UtmParams,

    /// Assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl LeadForm {
    /// Trim fields, drop empty optionals and check the required ones
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_lowercase();

        if name.is_empty() {
            return Err(LeadError::Validation("Informe seu nome.".into()));
        }
        if email.is_empty() {
            return Err(LeadError::Validation("Informe seu e-mail.".into()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err(LeadError::Validation(format!("E-mail inválido: {email}"))),
        }

        Ok(Self {
            name,
            email,
            company: clean(self.company),
            phone: clean(self.phone),
            volume: clean(self.volume),
            message: clean(self.message),
        })
    }
}

impl Lead {
    /// Build a new, not yet stored lead from a validated form and its attribution
    pub fn new(form: LeadForm, utm: UtmParams) -> Result<Self> {
        Ok(Self {
            id: None,
            form: form.normalized()?,
            utm,
            created_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LeadForm {
        LeadForm {
            name: "  Maria Souza ".into(),
            email: "Maria@Loja.com.br".into(),
            company: Some("Loja da Maria".into()),
            phone: Some("   ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalizes_form() {
        let lead = Lead::new(form(), UtmParams::default()).unwrap();
        assert_eq!(lead.form.name, "Maria Souza");
        assert_eq!(lead.form.email, "maria@loja.com.br");
        assert_eq!(lead.form.phone, None);
        assert_eq!(lead.id, None);
    }

    #[test]
    fn test_rejects_missing_fields() {
        let mut bad = form();
        bad.name = " ".into();
        assert!(matches!(Lead::new(bad, UtmParams::default()), Err(LeadError::Validation(_))));

        let mut bad = form();
        bad.email = "maria".into();
        assert!(matches!(Lead::new(bad, UtmParams::default()), Err(LeadError::Validation(_))));
    }

    #[test]
    fn test_validation_copy_is_portuguese() {
        let message = |form: LeadForm| Lead::new(form, UtmParams::default()).unwrap_err().user_message();

        assert_eq!(message(LeadForm { name: " ".into(), ..form() }), "Informe seu nome.");
        assert_eq!(message(LeadForm { email: String::new(), ..form() }), "Informe seu e-mail.");
        assert_eq!(
            message(LeadForm { email: "maria".into(), ..form() }),
            "E-mail inválido: maria"
        );
    }

    #[test]
    fn test_row_is_flat() {
        let lead = Lead::new(form(), UtmParams::from_query("utm_source=instagram")).unwrap();
        let row = serde_json::to_value(&lead).unwrap();

        assert_eq!(row["name"], "Maria Souza");
        assert_eq!(row["utm_source"], "instagram");
        assert!(row.get("id").is_none());
        assert!(row.get("utm_medium").is_none());
        assert!(row.get("form").is_none());
    }

    #[test]
    fn test_row_with_numeric_id() {
        let row = serde_json::json!({
            "id": 42,
            "name": "Maria Souza",
            "email": "maria@loja.com.br",
            "company": null,
            "utm_source": "google",
            "utm_term": null,
            "created_at": "2026-10-19T13:00:00.123456+00:00"
        });
        let lead: Lead = serde_json::from_value(row).unwrap();

        assert_eq!(lead.id, Some(LeadId::Number(42)));
        assert_eq!(lead.id.unwrap().to_string(), "42");
        assert_eq!(lead.form.company, None);
        assert_eq!(lead.utm.utm_source.as_deref(), Some("google"));
        assert!(lead.created_at.is_some());
    }

    #[test]
    fn test_row_with_uuid_id() {
        let id = Uuid::new_v4();
        let row = serde_json::json!({ "id": id, "name": "Ana", "email": "ana@exemplo.com" });
        let lead: Lead = serde_json::from_value(row).unwrap();

        assert_eq!(lead.id, Some(LeadId::from(id)));
    }
}
