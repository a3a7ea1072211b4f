use chrono::Utc;
use ring::rand::{SecureRandom, SystemRandom};

use crate::gateway::Book;

use super::config::SESSION_STORE;
use super::errors::SessionError;
use super::types::Session;

/// Entropy of the state token. 20 bytes (160 bits) renders the token
/// unguessable, and the hex encoding keeps it URL-safe without escaping.
const STATE_TOKEN_BYTES: usize = 20;

fn gen_state_token() -> Result<String, SessionError> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0u8; STATE_TOKEN_BYTES];
    rng.fill(&mut bytes)
        .map_err(|_| SessionError::Crypto("Failed to generate random state token".to_string()))?;
    Ok(hex::encode(bytes))
}

/// Store the search results under a fresh state token and return the token.
pub(crate) async fn create_session(books: Vec<Book>) -> Result<String, SessionError> {
    let state = gen_state_token()?;

    let session = Session {
        state: state.clone(),
        books,
        created_at: Utc::now(),
    };

    SESSION_STORE.lock().await.put(session).await?;
    tracing::debug!("Created session for state token: {state}");

    Ok(state)
}

/// Look up the session bound to a state token, if any.
pub async fn find_session(state: &str) -> Result<Option<Session>, SessionError> {
    SESSION_STORE.lock().await.get(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;
    use std::collections::HashSet;

    /// Test that generated state tokens are hex-encoded and carry the
    /// full 20 bytes of entropy.
    #[test]
    fn test_state_token_format() {
        let token = gen_state_token().unwrap();

        assert_eq!(token.len(), STATE_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// Test that token generation does not repeat across a large batch.
    /// With 160 bits of randomness a collision here would indicate a
    /// broken generator rather than bad luck.
    #[test]
    fn test_state_tokens_are_unique() {
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            let token = gen_state_token().unwrap();
            assert!(seen.insert(token), "duplicate state token generated");
        }
    }

    /// Test that a created session is retrievable by its state token
    /// and carries the book list unchanged.
    #[tokio::test]
    #[serial]
    async fn test_create_and_find_session() {
        init_test_environment().await;

        let books = vec![crate::gateway::Book {
            title: "Dune".to_string(),
            author_name: Some(vec!["Frank Herbert".to_string()]),
            description: "No description available".to_string(),
            url: "https://openlibrary.org/works/OL893415W".to_string(),
            author_key: Some(vec!["OL79034A".to_string()]),
        }];

        let state = create_session(books.clone()).await.unwrap();
        let found = find_session(&state).await.unwrap();

        let session = found.expect("session should be stored");
        assert_eq!(session.state, state);
        assert_eq!(session.books, books);
    }

    /// Test that looking up a token never handed out yields no session.
    #[tokio::test]
    #[serial]
    async fn test_find_session_unknown_state() {
        init_test_environment().await;

        let found = find_session("0000000000000000000000000000000000000000")
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
