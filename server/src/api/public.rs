use crate::AppState;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

/// Returns the router for the static frontend
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/style.css", get(stylesheet))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/style.css"),
    )
}

#[cfg(test)]
mod tests {
    use crate::{app, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use souschef_core::FakeClient;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_serves_form() {
        let state: AppState = Arc::new(FakeClient::new());

        let response = app(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("ingredients"));
        assert!(html.contains("/suggest"));
    }

    #[tokio::test]
    async fn test_stylesheet_served_as_css() {
        let state: AppState = Arc::new(FakeClient::new());

        let response = app(state)
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/css"
        );
    }
}
