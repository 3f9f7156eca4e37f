//! HTTP response building module
//!
//! Builds the JSON responses sent for every dispatched request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Build 200 OK response carrying a pre-serialized JSON body
pub fn build_json_response(body: Bytes) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(200)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .header("Content-Length", content_length)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            let mut resp = Response::new(Full::new(body));
            resp.headers_mut().insert(
                hyper::header::CONTENT_TYPE,
                hyper::header::HeaderValue::from_static(CONTENT_TYPE_JSON),
            );
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_build_json_response() {
        let resp = build_json_response(Bytes::from_static(br#"{"message":"ok"}"#));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["content-length"], "16");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"message":"ok"}"#);
    }
}
