use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;

pub const COLLECTION_METHODS: &str = "GET, POST, OPTIONS";
pub const ITEM_METHODS: &str = "GET, PUT, DELETE, POST, OPTIONS";

fn with_api_headers(mut response: Response, methods: &'static str) -> Response {
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(methods));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Headers for `/api/sentences`.
pub async fn collection_headers(response: Response) -> Response {
    with_api_headers(response, COLLECTION_METHODS)
}

/// Headers for `/api/sentences/...`.
pub async fn item_headers(response: Response) -> Response {
    with_api_headers(response, ITEM_METHODS)
}

/// `OPTIONS` preflight: headers only.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
