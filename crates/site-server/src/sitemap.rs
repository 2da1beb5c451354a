//! Sitemap and robots.txt

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub path: &'static str,
    /// 0.0 to 1.0
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

impl SitemapEntry {
    pub fn new(path: &'static str, priority: f32, change_frequency: ChangeFrequency) -> Self {
        Self {
            path,
            priority: priority.clamp(0.0, 1.0),
            change_frequency,
        }
    }
}

pub fn default_entries() -> Vec<SitemapEntry> {
    vec![
        SitemapEntry::new("/", 1.0, ChangeFrequency::Weekly),
        SitemapEntry::new("/contato", 0.8, ChangeFrequency::Monthly),
        SitemapEntry::new("/politica-de-privacidade", 0.3, ChangeFrequency::Yearly),
        SitemapEntry::new("/termos-de-uso", 0.3, ChangeFrequency::Yearly),
    ]
}

fn absolute(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" { format!("{base}/") } else { format!("{base}{path}") }
}

/// Render `sitemap.xml` for the given base URL
pub fn render_sitemap(base_url: &str, entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", absolute(base_url, entry.path)));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render `robots.txt` pointing at the sitemap
pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        absolute(base_url, "/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{GateDecision, RouteGate};

    #[test]
    fn test_one_url_per_entry() {
        let xml = render_sitemap("https://www.exemplo.com.br/", &default_entries());

        assert_eq!(xml.matches("<url>").count(), 4);
        assert!(xml.contains("<loc>https://www.exemplo.com.br/</loc>"));
        assert!(xml.contains("<loc>https://www.exemplo.com.br/contato</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>\n    <priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>\n    <priority>0.3</priority>"));
    }

    #[test]
    fn test_priority_is_clamped() {
        assert_eq!(SitemapEntry::new("/x", 1.7, ChangeFrequency::Monthly).priority, 1.0);
        assert_eq!(SitemapEntry::new("/x", -0.2, ChangeFrequency::Monthly).priority, 0.0);
    }

    #[test]
    fn test_sitemap_pages_are_not_gated() {
        let gate = RouteGate::default();
        for entry in default_entries() {
            assert_eq!(gate.decide(entry.path), GateDecision::Pass, "{}", entry.path);
        }
    }

    #[test]
    fn test_robots() {
        let robots = render_robots("http://localhost:3000");
        assert!(robots.ends_with("Sitemap: http://localhost:3000/sitemap.xml\n"));
    }
}
