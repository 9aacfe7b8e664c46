//! Shareable display link derived from a profile id.

use crate::domain::foundation::{ProfileId, ValidationError};

/// Page of the public front-end that renders a single profile.
pub const DEFAULT_DISPLAY_URL_BASE: &str =
    "https://acevespatricio.github.io/medical-app/display.html";

/// Template producing `<base>?id=<profile id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUrl {
    base: String,
}

impl DisplayUrl {
    /// Creates a template over `base`.
    ///
    /// The base must be an absolute http(s) URL with no query or fragment,
    /// since the profile id is appended as the query string.
    pub fn new(base: impl Into<String>) -> Result<Self, ValidationError> {
        let base = base.into();
        if base.is_empty() {
            return Err(ValidationError::empty_field("display_url_base"));
        }
        if !base.starts_with("https://") && !base.starts_with("http://") {
            return Err(ValidationError::invalid_format(
                "display_url_base",
                "must start with http:// or https://",
            ));
        }
        if base.contains('?') || base.contains('#') {
            return Err(ValidationError::invalid_format(
                "display_url_base",
                "must not contain a query or fragment",
            ));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the display link for `id`.
    pub fn for_profile(&self, id: &ProfileId) -> String {
        format!("{}?id={}", self.base, id)
    }
}

impl Default for DisplayUrl {
    fn default() -> Self {
        Self {
            base: DEFAULT_DISPLAY_URL_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_template_matches_published_front_end() {
        let id = ProfileId::new("1234").unwrap();
        assert_eq!(
            DisplayUrl::default().for_profile(&id),
            "https://acevespatricio.github.io/medical-app/display.html?id=1234"
        );
    }

    #[test]
    fn rejects_empty_base() {
        assert!(DisplayUrl::new("").is_err());
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(DisplayUrl::new("ftp://example.org/display.html").is_err());
    }

    #[test]
    fn rejects_base_with_query() {
        assert!(DisplayUrl::new("https://example.org/display.html?x=1").is_err());
        assert!(DisplayUrl::new("https://example.org/display.html#top").is_err());
    }

    #[test]
    fn accepts_custom_base() {
        let url = DisplayUrl::new("http://localhost:8000/display.html").unwrap();
        assert_eq!(url.base(), "http://localhost:8000/display.html");
    }

    proptest! {
        #[test]
        fn generated_link_embeds_id(_seed in any::<u64>()) {
            let template = DisplayUrl::default();
            let id = ProfileId::generate();
            let link = template.for_profile(&id);

            prop_assert!(link.starts_with(DEFAULT_DISPLAY_URL_BASE));
            let expected_suffix = format!("?id={}", id);
            prop_assert!(link.ends_with(&expected_suffix));
            prop_assert_eq!(link.len(), DEFAULT_DISPLAY_URL_BASE.len() + expected_suffix.len());
        }

        #[test]
        fn link_is_deterministic(raw in "[a-zA-Z0-9-]{1,40}") {
            let template = DisplayUrl::default();
            let id = ProfileId::new(raw).unwrap();
            prop_assert_eq!(template.for_profile(&id), template.for_profile(&id.clone()));
        }
    }
}
