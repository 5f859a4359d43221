//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Deserialize;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use cinehub_core::config::AppConfig;
use cinehub_entity::menu::MenuNode;
use cinehub_entity::route::{RawRouteNode, RouteTree};
use cinehub_guard::jwt::{Claims, JwtDecoder, TokenType};
use cinehub_guard::orchestrator::GuardOrchestrator;
use cinehub_guard::store::MemoryReturnPathStore;

/// Shape of `config/routes.toml`.
#[derive(Debug, Deserialize)]
struct RoutesFile {
    routes: Vec<RawRouteNode>,
    #[serde(default)]
    menu: Vec<MenuNode>,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application over the shipped `config/routes.toml`.
    pub fn new() -> Self {
        let config = AppConfig::default();

        let file = config::Config::builder()
            .add_source(config::File::with_name("config/routes"))
            .build()
            .expect("Failed to read routes file");
        let raw: RoutesFile = file
            .try_deserialize()
            .expect("Failed to parse routes file");

        let tree = RouteTree::from_raw(raw.routes).expect("Invalid route tree");
        let store = Arc::new(MemoryReturnPathStore::new(Duration::from_secs(60)));
        let orchestrator = Arc::new(
            GuardOrchestrator::new(&tree, raw.menu, config.guard.clone(), store)
                .expect("Failed to build orchestrator"),
        );
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let state = cinehub_api::state::AppState {
            config: Arc::new(config.clone()),
            jwt_decoder,
            orchestrator,
        };

        Self {
            router: cinehub_api::router::build_router(state),
            config,
        }
    }

    /// Sign an access token for a test user.
    pub fn token(&self, kind: i32, authorities: &[&str]) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "tester".to_string(),
            kind,
            authorities: authorities.iter().map(|a| a.to_string()).collect(),
            iat: now,
            exp: now + 600,
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    /// Issue a request and return status + parsed JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Body is not JSON")
        };
        (status, json)
    }

    /// Shorthand for a guard decision call.
    pub async fn decide(
        &self,
        client_id: &str,
        path: &str,
        is_authenticated: bool,
        token: Option<&str>,
    ) -> Value {
        let body = serde_json::json!({
            "client_id": client_id,
            "path": path,
            "is_authenticated": is_authenticated,
        });
        let (status, json) = self
            .request("POST", "/api/guard/decide", Some(body), token)
            .await;
        assert_eq!(status, StatusCode::OK, "decide failed: {json}");
        json["data"].clone()
    }
}
