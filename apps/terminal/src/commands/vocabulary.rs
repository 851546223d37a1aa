//! Vocabulary management commands.

use crate::state::AppState;
use crate::vocabulary::NewVocabulary;
use quiz_core::VocabularyEntry;

use super::CommandError;

/// List the personal vocabulary.
pub async fn list_vocabulary(state: &AppState) -> Result<Vec<VocabularyEntry>, CommandError> {
    Ok(state.vocabulary.load_personal().await)
}

/// Add an entry to the personal vocabulary.
pub async fn add_vocabulary(
    input: NewVocabulary,
    state: &AppState,
) -> Result<VocabularyEntry, CommandError> {
    state.vocabulary.add(input).await.map_err(Into::into)
}

/// Delete an entry from the personal vocabulary.
pub async fn delete_vocabulary(id: String, state: &AppState) -> Result<(), CommandError> {
    state.vocabulary.delete(&id).await.map_err(Into::into)
}
