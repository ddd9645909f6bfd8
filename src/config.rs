//! Runtime configuration utilities for ae-pulse.

use std::{env, path::PathBuf};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the openFDA drug-event endpoint.
    pub openfda_base: String,
    /// Optional openFDA API key appended to outbound requests.
    pub openfda_api_key: Option<String>,
    /// Contact email advertised in the outbound User-Agent.
    pub contact_email: String,
    /// Directory holding the static dashboard assets.
    pub ui_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let openfda_base = env::var("OPENFDA_BASE_URL")
            .unwrap_or_else(|_| "https://api.fda.gov/drug/event.json".to_string());
        let openfda_api_key = env::var("OPENFDA_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let contact_email =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| "research@example.com".to_string());
        let ui_dir = env::var("UI_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./ui/static"));

        Ok(Self {
            openfda_base,
            openfda_api_key,
            contact_email,
            ui_dir,
        })
    }

    /// User-Agent string sent with openFDA requests.
    pub fn user_agent(&self) -> String {
        format!("ae-pulse/0.1 (+{})", self.contact_email)
    }
}
