//! Waitlist relay configuration from environment variables.
//!
//! Call `dotenvy::dotenv()` before `WaitlistConfig::from_env()` to pick up a `.env` file.

use crate::models::DEFAULT_SOURCE;

pub const DEFAULT_FORM_ID: &str = "mjkrdoya";
pub const DEFAULT_BASE_URL: &str = "https://formspree.io";

/// Where and how waitlist signups are forwarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Formspree form identifier (`FORMSPREE_FORM_ID`)
    pub form_id: String,
    /// Endpoint base, overridable for staging and tests (`FORMSPREE_BASE_URL`)
    pub base_url: String,
    /// `source` tag sent with every submission (`WAITLIST_SOURCE`)
    pub source: String,
}

impl WaitlistConfig {
    pub fn from_env() -> Self {
        Self {
            form_id: var_or("FORMSPREE_FORM_ID", DEFAULT_FORM_ID),
            base_url: var_or("FORMSPREE_BASE_URL", DEFAULT_BASE_URL),
            source: var_or("WAITLIST_SOURCE", DEFAULT_SOURCE),
        }
    }

    /// Full URL submissions are posted to
    pub fn endpoint(&self) -> String {
        format!("{}/f/{}", self.base_url.trim_end_matches('/'), self.form_id)
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

// Unset and blank variables both fall back to the default
fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
