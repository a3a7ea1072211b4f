use super::client::get_client;
use super::config::{BOOK_SEARCH_URL, BOOK_SEARCH_USER_AGENT};
use super::errors::GatewayError;
use super::types::{Book, SearchQuery, SearchResponse};

/// Replace every run of whitespace with the catalog's `+` join character.
/// Leading and trailing whitespace becomes a join character too; the catalog
/// tolerates it.
fn join_whitespace(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut in_whitespace = false;
    for ch in field.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('+');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// Build the catalog query string: `q=<title>` and `author=<author>`,
/// combined conjunctively when both filters are present.
fn build_search_query(query: &SearchQuery) -> String {
    match (query.title.as_deref(), query.author.as_deref()) {
        (Some(title), Some(author)) => format!(
            "q={}&author={}",
            join_whitespace(title),
            join_whitespace(author)
        ),
        (Some(title), None) => format!("q={}", join_whitespace(title)),
        (None, Some(author)) => format!("author={}", join_whitespace(author)),
        (None, None) => String::new(),
    }
}

/// Query the catalog and reduce the response to Book records. An empty or
/// missing `docs` array is a successful, empty result.
pub(crate) async fn search_books(query: &SearchQuery) -> Result<Vec<Book>, GatewayError> {
    let url = format!("{}?{}", BOOK_SEARCH_URL.as_str(), build_search_query(query));

    let client = get_client();
    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, BOOK_SEARCH_USER_AGENT.as_str())
        .send()
        .await
        .map_err(|e| GatewayError::Search(e.to_string()))?;

    match response.status() {
        reqwest::StatusCode::OK => {}
        status => {
            tracing::debug!("Book search returned status {}", status);
            return Err(GatewayError::Search(status.to_string()));
        }
    };

    let response_body = response
        .text()
        .await
        .map_err(|e| GatewayError::Search(e.to_string()))?;
    let search_response: SearchResponse = serde_json::from_str(&response_body)
        .map_err(|e| GatewayError::Serde(format!("Failed to deserialize search response: {e}")))?;

    tracing::debug!("Book search returned {} docs", search_response.docs.len());

    Ok(search_response.docs.into_iter().map(Book::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Test that a title-only query carries just the `q` filter with
    /// whitespace joined by `+`.
    #[test]
    fn test_query_with_title_only() {
        let query = SearchQuery {
            title: Some("The Great Gatsby".to_string()),
            author: None,
        };
        assert_eq!(build_search_query(&query), "q=The+Great+Gatsby");
    }

    /// Test that an author-only query carries just the `author` filter.
    #[test]
    fn test_query_with_author_only() {
        let query = SearchQuery {
            title: None,
            author: Some("Frank Herbert".to_string()),
        };
        assert_eq!(build_search_query(&query), "author=Frank+Herbert");
    }

    /// Test that both filters combine conjunctively with `q` first.
    #[test]
    fn test_query_with_title_and_author() {
        let query = SearchQuery {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
        };
        assert_eq!(build_search_query(&query), "q=Dune&author=Frank+Herbert");
    }

    /// Test that whitespace runs collapse to a single join character and
    /// that edge whitespace is joined rather than trimmed.
    #[test]
    fn test_query_whitespace_runs() {
        let query = SearchQuery {
            title: Some("  A   Canticle\tfor Leibowitz ".to_string()),
            author: None,
        };
        assert_eq!(build_search_query(&query), "q=+A+Canticle+for+Leibowitz+");
    }

    proptest! {
        /// For every non-empty (title, author) pair the query encodes both
        /// filters conjunctively and contains no residual whitespace.
        #[test]
        fn prop_both_filters_encode_conjunctively(
            title in "[A-Za-z][A-Za-z ]{0,30}",
            author in "[A-Za-z][A-Za-z ]{0,30}",
        ) {
            let query = SearchQuery {
                title: Some(title),
                author: Some(author),
            };
            let encoded = build_search_query(&query);

            prop_assert!(encoded.starts_with("q="));
            prop_assert!(encoded.contains("&author="));
            prop_assert!(!encoded.contains(' '));
        }

        /// A single filter encodes alone: no `&` separator appears.
        #[test]
        fn prop_single_filter_encodes_alone(field in "[A-Za-z][A-Za-z ]{0,30}") {
            let title_only = build_search_query(&SearchQuery {
                title: Some(field.clone()),
                author: None,
            });
            prop_assert!(title_only.starts_with("q="));
            prop_assert!(!title_only.contains('&'));

            let author_only = build_search_query(&SearchQuery {
                title: None,
                author: Some(field),
            });
            prop_assert!(author_only.starts_with("author="));
            prop_assert!(!author_only.contains('&'));
        }
    }
}
