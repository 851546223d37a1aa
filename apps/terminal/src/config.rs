//! Application configuration from environment variables.

use std::path::PathBuf;
use tracing::warn;

/// Environment variable overriding the database path.
pub const DB_PATH_VAR: &str = "VOCAB_QUIZ_DB";

/// Environment variable fixing the quiz random seed.
pub const SEED_VAR: &str = "VOCAB_QUIZ_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DB_PATH_VAR).ok(),
            std::env::var(SEED_VAR).ok(),
        )
    }

    fn from_vars(db_path: Option<String>, seed: Option<String>) -> Self {
        let db_path = db_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let seed = seed.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = %raw, "ignoring invalid {}", SEED_VAR);
                None
            }
        });

        Self { db_path, seed }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .map(|dir| dir.join("vocab-quiz"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocabulary.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(None, None);
        assert!(config.db_path.ends_with("vocabulary.db"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_vars(Some("/tmp/words.db".into()), Some(" 42 ".into()));
        assert_eq!(config.db_path, PathBuf::from("/tmp/words.db"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_seed_ignored() {
        let config = AppConfig::from_vars(Some("  ".into()), Some("abc".into()));
        assert_eq!(config.seed, None);
        assert!(config.db_path.ends_with("vocabulary.db"));
    }
}
