use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::editor::{Advisory, HeaderStore};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("fail to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("fail to deserialize config: {source}")]
    Deserialize {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Payload mode: the request body needs a `Content-Type` header.
    pub requires_content_type: bool,

    /// Value of the external content type field.
    pub content_type: Option<String>,

    pub user_agent: String,

    /// Append the default header set before reconciling.
    pub insert_defaults: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            requires_content_type: false,
            content_type: None,
            user_agent: concat!("rustyheaders/", env!("CARGO_PKG_VERSION")).to_string(),
            insert_defaults: false,
        }
    }
}

impl EditorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<EditorConfig>(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Builds a store over `raw` in the configured mode.
    pub fn store_for(&self, raw: impl Into<String>) -> HeaderStore {
        HeaderStore::from_raw(raw).with_requires_content_type(self.requires_content_type)
    }

    /// Runs the configured reconciliation over `raw`: detection, default set,
    /// content type field, then in payload mode the `Content-Type` injection
    /// from whatever content type the store has recorded by then.
    pub fn reconcile(&self, raw: impl Into<String>) -> (HeaderStore, Option<Advisory>) {
        let mut store = self.store_for(raw);
        let mut advisory = store.detect_content_type();
        if self.insert_defaults {
            advisory = store.insert_default_set(&self.user_agent);
        }
        if let Some(ct) = &self.content_type {
            store.on_content_type_changed(ct);
        }
        if store.requires_content_type() {
            let recorded = store.content_type().map(str::to_owned);
            advisory = Some(store.ensure_content_type_header(recorded.as_deref()));
        }
        (store, advisory)
    }
}
