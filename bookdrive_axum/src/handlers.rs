use askama::Template;
use axum::{
    Json,
    extract::Query,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use bookdrive::{SearchOutcome, SearchQuery, begin_search_core, finish_authorization_core};

use crate::error::IntoResponseError;

#[derive(Template)]
#[template(path = "index.j2")]
struct IndexTemplate<'a> {
    message: &'a str,
}

pub(crate) async fn index() -> Result<Html<String>, (StatusCode, String)> {
    let template = IndexTemplate {
        message: "Search by title, author or both. The results are saved to your drive.",
    };
    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
}

/// Treat an empty query value (`?title=`) the same as an absent one.
fn presence(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) async fn search_books(
    Query(params): Query<SearchParams>,
) -> Result<Response, (StatusCode, String)> {
    let query = SearchQuery {
        title: presence(params.title),
        author: presence(params.author),
    };

    if query.title.is_none() && query.author.is_none() {
        return Err((StatusCode::NOT_FOUND, "Not Found".to_string()));
    }

    tracing::debug!("Searching catalog with filters: {:?}", query);

    let outcome = begin_search_core(&query).await.into_response_error()?;

    let response = match outcome {
        // 302 as the reference flow answers; axum's Redirect helper would
        // answer 303 for a GET.
        SearchOutcome::Redirect(auth_url) => {
            (StatusCode::FOUND, [(header::LOCATION, auth_url)]).into_response()
        }
        SearchOutcome::NoResults => "No Results Found".into_response(),
    };

    Ok(response)
}

pub(crate) async fn oauth2callback(
    Query(params): Query<CallbackParams>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    // Both parameters are required; a redirect missing either cannot belong
    // to a pending search and gets the same 404 as an unknown state token.
    let (Some(code), Some(state)) = (presence(params.code), presence(params.state)) else {
        return Err((StatusCode::NOT_FOUND, "Not Found".to_string()));
    };

    let confirmation = finish_authorization_core(&code, &state)
        .await
        .into_response_error()?;

    Ok(Json(confirmation))
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
