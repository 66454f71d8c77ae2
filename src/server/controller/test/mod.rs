use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, category::CategoryDto, task::TaskDto},
    server::{router, state::AppState},
};


fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(db.clone()))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
