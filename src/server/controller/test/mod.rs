//! Request-level tests driving the full router with a session layer.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory::helpers::DEFAULT_PASSWORD};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{router::router, service::mail::test::RecordingMailer, state::AppState};

mod auth;

/// Peer address attached to every request, as `into_make_service_with_connect_info` does.
const PEER: ([u8; 4], u16) = ([127, 0, 0, 1], 40000);

/// Router wired to an in-memory database, a SQLite session store and a recording mailer.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    mailer: Arc<RecordingMailer>,
}

/// Status, session cookie and JSON body of one response.
struct TestResponse {
    status: StatusCode,
    cookie: Option<String>,
    content_type: Option<String>,
    body: Value,
}

impl TestApp {
    async fn new(expose_otp: bool) -> Self {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store.migrate().await.unwrap();

        let mailer = Arc::new(RecordingMailer::new());
        let state = AppState::new(
            db.clone(),
            mailer.clone(),
            "http://localhost:3000".to_string(),
            expose_otp,
        );

        let router = router()
            .unwrap()
            .with_state(state)
            .layer(SessionManagerLayer::new(store).with_secure(false));

        Self { router, db, mailer }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .extension(ConnectInfo(SocketAddr::from(PEER)));
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_string);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            cookie,
            content_type,
            body,
        }
    }

    /// Logs in with the factory password and returns the session cookie.
    async fn login(&self, email: &str) -> String {
        let response = self
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": DEFAULT_PASSWORD })),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.cookie.expect("login sets a session cookie")
    }
}
