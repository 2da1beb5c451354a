//! UTM Attribution
//!
//! Campaign parameters read from the landing URL's query string.

use serde::{Deserialize, Serialize};
use url::Url;

pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_CONTENT: &str = "utm_content";
pub const UTM_TERM: &str = "utm_term";

/// The five standard campaign-tracking fields, each optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
}

impl UtmParams {
    /// Read UTM fields from a full URL
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
    }

    /// Read UTM fields from a raw query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Self {
        let mut utm = Self::default();

        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                UTM_SOURCE => &mut utm.utm_source,
                UTM_MEDIUM => &mut utm.utm_medium,
                UTM_CAMPAIGN => &mut utm.utm_campaign,
                UTM_CONTENT => &mut utm.utm_content,
                UTM_TERM => &mut utm.utm_term,
                _ => continue,
            };
            // first occurrence wins
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        utm
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        let url = Url::parse(
            "https://example.com.br/contato?utm_source=google&utm_medium=cpc&utm_campaign=black%20friday&ref=x",
        )
        .unwrap();
        let utm = UtmParams::from_url(&url);

        assert_eq!(utm.utm_source.as_deref(), Some("google"));
        assert_eq!(utm.utm_medium.as_deref(), Some("cpc"));
        assert_eq!(utm.utm_campaign.as_deref(), Some("black friday"));
        assert_eq!(utm.utm_content, None);
        assert_eq!(utm.utm_term, None);
    }

    #[test]
    fn test_absent_and_empty_are_none() {
        assert!(UtmParams::from_query("").is_empty());
        assert!(UtmParams::from_query("?utm_source=&utm_term=").is_empty());

        let utm = UtmParams::from_query("?utm_term=crm+whatsapp&utm_content=banner");
        assert_eq!(utm.utm_term.as_deref(), Some("crm whatsapp"));
        assert_eq!(utm.utm_content.as_deref(), Some("banner"));
    }

    #[test]
    fn test_serializes_only_present_fields() {
        let utm = UtmParams::from_query("utm_source=newsletter");
        let json = serde_json::to_value(&utm).unwrap();
        assert_eq!(json, serde_json::json!({"utm_source": "newsletter"}));
    }
}
