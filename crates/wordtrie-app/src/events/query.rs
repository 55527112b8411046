use wordtrie_types::Reply;

use crate::state::AppState;

pub async fn handle_find(state: &AppState, prefix: &str) -> Reply {
    let results = state.dictionary.read().await.search_prefix(prefix);
    tracing::debug!("Prefix '{}': {} results", prefix, results.len());
    Reply::Results(results)
}

pub async fn handle_get(state: &AppState, word: String) -> Reply {
    let explanation = state
        .dictionary
        .read()
        .await
        .lookup(&word)
        .map(str::to_string);
    Reply::Explanation { word, explanation }
}

pub async fn handle_count(state: &AppState, prefix: String) -> Reply {
    let count = state.dictionary.read().await.count_prefix(&prefix);
    Reply::Count { prefix, count }
}

pub async fn handle_dump(state: &AppState) -> Reply {
    match state.dictionary.read().await.to_json() {
        Ok(json) => Reply::Dump(json),
        Err(e) => {
            tracing::error!("Failed to dump dictionary: {}", e);
            Reply::Error(e.to_string())
        }
    }
}
