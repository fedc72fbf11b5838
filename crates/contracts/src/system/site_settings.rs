use serde::{Deserialize, Serialize};

/// Process-wide feature-visibility settings.
///
/// Flags are `Option<bool>` on purpose: consumers distinguish a flag
/// that was explicitly set to `false` from one that is simply absent
/// (e.g. a settings row written by an older build).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteSettings {
    #[serde(rename = "siteTitle", default)]
    pub site_title: String,

    #[serde(rename = "showEvents")]
    pub show_events: Option<bool>,

    #[serde(rename = "showKnowledge")]
    pub show_knowledge: Option<bool>,

    #[serde(rename = "showBlog")]
    pub show_blog: Option<bool>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SiteSettings {
    /// Settings written for a fresh installation: everything visible
    pub fn defaults() -> Self {
        Self {
            site_title: "Knowledge Hub".to_string(),
            show_events: Some(true),
            show_knowledge: Some(true),
            show_blog: Some(true),
            updated_at: None,
        }
    }
}

/// DTO for updating site settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteSettingsDto {
    #[serde(rename = "siteTitle")]
    pub site_title: String,

    #[serde(rename = "showEvents")]
    pub show_events: Option<bool>,

    #[serde(rename = "showKnowledge")]
    pub show_knowledge: Option<bool>,

    #[serde(rename = "showBlog")]
    pub show_blog: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_domain() {
        let s = SiteSettings::defaults();
        assert_eq!(s.show_events, Some(true));
        assert_eq!(s.show_knowledge, Some(true));
        assert_eq!(s.show_blog, Some(true));
    }

    #[test]
    fn absent_flags_stay_distinguishable_from_false() {
        let s: SiteSettings = serde_json::from_str(r#"{"siteTitle":"Hub"}"#).unwrap();
        assert_eq!(s.show_events, None);

        let s: SiteSettings =
            serde_json::from_str(r#"{"siteTitle":"Hub","showEvents":false}"#).unwrap();
        assert_eq!(s.show_events, Some(false));
    }
}
