use axum::{routing::get, Router};

use crate::server::controller::health::health;

pub fn router() -> Router {
    Router::new().route("/", get(health))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    /// Tests the liveness endpoint.
    ///
    /// Expected: 200 with "Bot is online!"
    #[tokio::test]
    async fn test_get_root() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Bot is online!");
    }

    /// Tests that no other routes are served.
    ///
    /// Expected: 404 for unknown paths, 405 for POST /
    #[tokio::test]
    async fn test_other_routes() {
        let response = router()
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
