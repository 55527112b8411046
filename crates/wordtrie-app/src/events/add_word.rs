use wordtrie_types::Reply;

use crate::state::AppState;

pub async fn handle_add_word(state: &AppState, word: String, explanation: String) -> Reply {
    let mut dictionary = state.dictionary.write().await;
    match dictionary.insert(&word, explanation) {
        Ok(()) => {
            tracing::debug!("Added '{}', {} words stored", word, dictionary.len());
            Reply::Added(word)
        }
        Err(e) => {
            tracing::warn!("Rejected insert: {}", e);
            Reply::Error(e.to_string())
        }
    }
}
