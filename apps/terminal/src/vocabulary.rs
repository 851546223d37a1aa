//! Personal vocabulary management over the key-value store.
//!
//! The whole personal list lives under one key as a JSON array. Every write
//! replaces the full array.

use crate::store::{KeyValueStore, StoreError};
use chrono::Utc;
use quiz_core::{default_vocabulary, Level, VocabularyEntry};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Store key holding the personal vocabulary list.
pub const STORAGE_KEY: &str = "@personal_vocabulary";

/// Category assigned when the user leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

type Result<T> = std::result::Result<T, VocabularyError>;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("vocabulary entry not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid stored vocabulary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which list a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularySource {
    Default,
    Personal,
}

/// User input for a new vocabulary entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVocabulary {
    pub native: String,
    pub target: String,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Repository for the personal vocabulary list.
pub struct VocabularyRepository<S> {
    store: S,
}

impl<S: KeyValueStore> VocabularyRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the personal list, treating any read or decode failure as empty.
    pub async fn load_personal(&self) -> Vec<VocabularyEntry> {
        match self.read_personal().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "failed to load personal vocabulary, using empty list");
                Vec::new()
            }
        }
    }

    async fn read_personal(&self) -> Result<Vec<VocabularyEntry>> {
        match self.store.get(STORAGE_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the stored personal list.
    pub async fn save_personal(&self, entries: &[VocabularyEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(STORAGE_KEY, &raw).await?;
        debug!(count = entries.len(), "saved personal vocabulary");
        Ok(())
    }

    /// Validate and append a new entry.
    pub async fn add(&self, input: NewVocabulary) -> Result<VocabularyEntry> {
        let native = input.native.trim();
        let target = input.target.trim();
        if native.is_empty() {
            return Err(VocabularyError::MissingField("native term"));
        }
        if target.is_empty() {
            return Err(VocabularyError::MissingField("target term"));
        }

        let mut entries = self.read_personal().await?;
        let entry = VocabularyEntry {
            id: next_id(&entries, Utc::now().timestamp_millis()),
            native: native.to_string(),
            target: target.to_string(),
            pronunciation: non_blank(input.pronunciation.as_deref()),
            level: input.level.unwrap_or_default(),
            category: non_blank(input.category.as_deref())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        };

        entries.push(entry.clone());
        self.save_personal(&entries).await?;
        info!(id = %entry.id, "added vocabulary entry");
        Ok(entry)
    }

    /// Remove an entry by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.read_personal().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(VocabularyError::NotFound(id.to_string()));
        }

        self.save_personal(&entries).await?;
        info!(id, "deleted vocabulary entry");
        Ok(())
    }

    /// Entries a quiz should be generated from.
    ///
    /// A personal quiz with no usable personal entries falls back to the
    /// built-in set.
    pub async fn quiz_pool(&self, source: VocabularySource) -> Vec<VocabularyEntry> {
        match source {
            VocabularySource::Default => default_vocabulary(),
            VocabularySource::Personal => {
                let personal = self.load_personal().await;
                if personal.is_empty() {
                    info!("no personal vocabulary, using built-in set");
                    default_vocabulary()
                } else {
                    personal
                }
            }
        }
    }
}

/// Timestamp-derived id, bumped until it is unused.
fn next_id(existing: &[VocabularyEntry], now_millis: i64) -> String {
    let mut candidate = now_millis;
    while existing.iter().any(|e| e.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
