//! Profile store configuration

use serde::Deserialize;

use crate::domain::profile::{DisplayUrl, DEFAULT_DISPLAY_URL_BASE};

use super::error::ValidationError;

/// Profile store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesConfig {
    /// Page that renders a profile; the id is appended as `?id=<id>`
    #[serde(default = "default_display_url_base")]
    pub display_url_base: String,
}

impl ProfilesConfig {
    /// Build the display link template
    pub fn display_url(&self) -> Result<DisplayUrl, ValidationError> {
        DisplayUrl::new(self.display_url_base.clone())
            .map_err(|e| ValidationError::InvalidDisplayUrl(e.to_string()))
    }

    /// Validate profile store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.display_url().map(|_| ())
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            display_url_base: default_display_url_base(),
        }
    }
}

fn default_display_url_base() -> String {
    DEFAULT_DISPLAY_URL_BASE.to_string()
}
