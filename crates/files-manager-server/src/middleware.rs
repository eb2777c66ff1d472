use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the request id on requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preserves an incoming `x-request-id` or generates one, exposes it to
/// downstream layers as a request extension and echoes it on the response.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let header_name = HeaderName::from_static(REQUEST_ID_HEADER);

    let req_id_value = match req.headers().get(&header_name) {
        Some(value) => value.clone(),
        None => generate_request_id(),
    };

    // Add to request extensions for downstream usage (e.g., logging)
    req.extensions_mut().insert(req_id_value.clone());

    let mut res = next.run(req).await;

    res.headers_mut().insert(header_name, req_id_value);

    res
}

fn generate_request_id() -> HeaderValue {
    // A hyphenated UUID is always a valid header value
    HeaderValue::from_maybe_shared(Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
