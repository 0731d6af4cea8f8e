use std::sync::Arc;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use user_api::domain::user::models::CreateUserCommand;
use user_api::domain::user::ports::UserServicePort;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;
use user_api::outbound::repositories::InMemoryUserRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "password123";

/// Router wired like the binary, driven in-process without a listener
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub authenticator: Arc<Authenticator>,
}

/// Status and parsed body (Null when the body is empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw_body: Vec<u8>,
}

impl TestApp {
    /// Build the application with a fresh store seeded with the admin user
    pub async fn spawn() -> Self {
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, chrono::Duration::hours(1)));
        let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));

        user_service
            .create_user(
                CreateUserCommand::new(
                    Some("Admin".to_string()),
                    Some(ADMIN_EMAIL.to_string()),
                    Some(ADMIN_PASSWORD.to_string()),
                )
                .expect("Invalid bootstrap user"),
            )
            .await
            .expect("Failed to seed bootstrap user");

        let router = create_router(user_service, Arc::clone(&authenticator));

        Self {
            router,
            authenticator,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// POST a body sent verbatim, without a content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let raw_body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        let body = serde_json::from_slice(&raw_body).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw_body,
        }
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, path, Some(body), None).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None, None).await
    }

    /// GET with a Bearer token
    pub async fn get_authenticated(&self, path: &str, token: &str) -> TestResponse {
        let header = format!("Bearer {}", token);
        self.request(Method::GET, path, None, Some(&header)).await
    }

    /// Log in and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        response.body["accessToken"]
            .as_str()
            .expect("Missing accessToken")
            .to_string()
    }

    /// Token for the seeded admin, signed directly so it does not depend on store contents
    pub fn admin_token(&self) -> String {
        self.authenticator
            .generate_token(1, ADMIN_EMAIL)
            .expect("Failed to sign token")
    }

    pub async fn user_count(&self) -> usize {
        self.get_authenticated("/users", &self.admin_token())
            .await
            .body
            .as_array()
            .expect("User list is not an array")
            .len()
    }
}
