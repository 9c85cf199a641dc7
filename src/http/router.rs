use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::sentence::{Sentence, SentenceId};
use crate::service::{SentenceInput, SentenceService};
use crate::snapshot::SnapshotStore;

use super::cors::{collection_headers, item_headers, preflight};
use super::error::ApiError;

pub const COLLECTION_PATH: &str = "/api/sentences";
const ITEM_PREFIX: &str = "/api/sentences/";

/// Build the axum `Router`: the sentence API, the UI document at `/` and the
/// static directory under `/static/`.
pub fn router<S: SnapshotStore + 'static>(
    service: Arc<SentenceService<S>>,
    static_dir: impl AsRef<Path>,
) -> Router {
    let static_dir = static_dir.as_ref();

    let api = Router::new()
        .route(
            COLLECTION_PATH,
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .options(preflight)
                .fallback(method_not_allowed)
                .layer(map_response(collection_headers)),
        )
        .route(
            ITEM_PREFIX,
            any(item_handler::<S>).layer(map_response(item_headers)),
        )
        .route(
            "/api/sentences/*rest",
            any(item_handler::<S>).layer(map_response(item_headers)),
        )
        .with_state(service);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.addr` and serve until the server stops.
pub async fn serve<S: SnapshotStore + 'static>(
    service: Arc<SentenceService<S>>,
    config: &ServerConfig,
) -> Result<(), std::io::Error> {
    let app = router(service, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "sentence clipboard listening");
    axum::serve(listener, app).await
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub group: Option<String>,
}

/// What the part of an item path after `/api/sentences/` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemRoute {
    Sentence(SentenceId),
    Copy(SentenceId),
    Unknown,
}

/// The id segment is validated before anything else, so a bad id is a 400
/// even on paths that would otherwise be a 405. A single trailing slash after
/// the id still names the sentence.
fn parse_item_path(rest: &str) -> Result<ItemRoute, ApiError> {
    let mut segments = rest.split('/');
    let id = segments
        .next()
        .unwrap_or_default()
        .parse::<SentenceId>()
        .map_err(|_| ApiError::MalformedPath)?;

    Ok(match (segments.next(), segments.next()) {
        (None, _) | (Some(""), None) => ItemRoute::Sentence(id),
        (Some("copy"), None) => ItemRoute::Copy(id),
        _ => ItemRoute::Unknown,
    })
}

/// Decode a create/update body regardless of the request's Content-Type.
fn decode_input(body: &[u8]) -> Result<SentenceInput, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// `GET /api/sentences?group=...`
async fn list_handler<S: SnapshotStore + 'static>(
    State(service): State<Arc<SentenceService<S>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Sentence>>, ApiError> {
    Ok(Json(service.list(query.group.as_deref())?))
}

/// `POST /api/sentences`
async fn create_handler<S: SnapshotStore + 'static>(
    State(service): State<Arc<SentenceService<S>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Sentence>), ApiError> {
    let input = decode_input(&body)?;
    let sentence = service.create(input)?;
    Ok((StatusCode::CREATED, Json(sentence)))
}

/// Everything under `/api/sentences/`: update, delete, copy and preflight.
async fn item_handler<S: SnapshotStore + 'static>(
    State(service): State<Arc<SentenceService<S>>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let rest = uri.path().strip_prefix(ITEM_PREFIX).unwrap_or_default();
    match (method.as_str(), parse_item_path(rest)?) {
        ("PUT", ItemRoute::Sentence(id)) => {
            let input = decode_input(&body)?;
            Ok(Json(service.update(id, input)?).into_response())
        }
        ("DELETE", ItemRoute::Sentence(id)) => Ok(Json(service.delete(id)?).into_response()),
        ("POST", ItemRoute::Copy(id)) => Ok(Json(service.copy(id)?).into_response()),
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
