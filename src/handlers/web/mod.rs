use axum::{
    Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use axum_macros::debug_handler;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use std::{collections::HashMap, sync::Arc};

use crate::{dto::SaveNoteForm, models::NoteId, render, service::NoteService};

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(new_note))
        .route("/{id}", get(get_note).post(save_note))
        .with_state(service)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Assigns a fresh note id and sends the client to its URL.
#[debug_handler]
pub async fn new_note() -> Response {
    let id = NoteId::random();

    (StatusCode::FOUND, [(header::LOCATION, format!("/{id}"))]).into_response()
}

#[debug_handler]
pub async fn get_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let id = match NoteId::parse(&id) {
        Ok(id) => id,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid note ID").into_response(),
    };

    let content = match service.load_note(&id).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("failed to load note {}: {}", id, e);
            return (StatusCode::BAD_GATEWAY, "Storage unavailable").into_response();
        }
    };

    if wants_raw(&params, &headers) {
        return match content {
            Some(text) => (StatusCode::OK, text).into_response(),
            None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        };
    }

    Html(render::editor_page(&id, content.as_deref().unwrap_or(""))).into_response()
}

#[debug_handler]
pub async fn save_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let id = match NoteId::parse(&id) {
        Ok(id) => id,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid note ID").into_response(),
    };

    let text = body_text(&headers, &body);

    match service.save_note(&id, &text).await {
        Ok(()) => (StatusCode::OK, "OK").into_response(),
        Err(e) => {
            tracing::error!("failed to save note {}: {}", id, e);
            (StatusCode::BAD_GATEWAY, "Storage unavailable").into_response()
        }
    }
}

/// Raw mode is requested explicitly with a `raw` query parameter or implied
/// by command-line user agents. Kept behind one predicate so the user-agent
/// sniffing can be swapped for content negotiation later.
fn wants_raw(params: &HashMap<String, String>, headers: &HeaderMap) -> bool {
    if params.contains_key("raw") {
        return true;
    }

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    user_agent.starts_with("curl") || user_agent.starts_with("Wget")
}

/// Form-encoded bodies carry the text in the `text` field; any other body is
/// taken verbatim.
fn body_text(headers: &HeaderMap, body: &Bytes) -> String {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.contains("application/x-www-form-urlencoded") {
        let form: SaveNoteForm = serde_urlencoded::from_bytes(body).unwrap_or_default();
        form.text
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}
