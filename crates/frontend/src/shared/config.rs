//! Page configuration
//!
//! The page talks to the server that served it unless the host document
//! overrides the API base with `<meta name="api-base" content="...">`.

use contracts::domain::a001_chat::aggregate::CHAT_PATH;
use contracts::domain::a002_document_upload::aggregate::UPLOAD_PATH;

const API_BASE_SELECTOR: &str = "meta[name=\"api-base\"]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every endpoint path; empty means same-origin relative URLs
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from the host document
    ///
    /// Falls back to the default (same-origin) configuration when the meta
    /// tag is missing or empty.
    pub fn load() -> Self {
        match read_api_base_meta() {
            Some(base) => {
                log::info!("API base from <meta>: {}", base);
                Self::new(base)
            }
            None => {
                log::debug!("Using same-origin API base");
                Self::default()
            }
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.api_base, CHAT_PATH)
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base, UPLOAD_PATH)
    }
}

fn read_api_base_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_SELECTOR).ok()??;
    let content = meta.get_attribute("content")?;
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
