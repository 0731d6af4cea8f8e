use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::docs;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub authenticator: Arc<Authenticator>,
}

/// What a caller must present to reach a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

#[derive(Debug)]
pub struct RoutePolicy {
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
}

/// Access policy per route. Only listing users needs a token.
pub static ROUTE_POLICIES: [RoutePolicy; 5] = [
    RoutePolicy {
        method: Method::POST,
        path: "/login",
        access: Access::Public,
    },
    RoutePolicy {
        method: Method::GET,
        path: "/users",
        access: Access::Bearer,
    },
    RoutePolicy {
        method: Method::POST,
        path: "/users",
        access: Access::Public,
    },
    RoutePolicy {
        method: Method::PUT,
        path: "/users/:id",
        access: Access::Public,
    },
    RoutePolicy {
        method: Method::DELETE,
        path: "/users/:id",
        access: Access::Public,
    },
];

/// Look up the policy for a route; routes missing from the table require a token.
pub fn access_for(method: &Method, path: &str) -> Access {
    ROUTE_POLICIES
        .iter()
        .find(|policy| policy.method == *method && policy.path == path)
        .map_or(Access::Bearer, |policy| policy.access)
}

pub fn create_router(
    user_service: Arc<UserService<InMemoryUserRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
    };

    let endpoints: [(Method, &'static str, MethodRouter<AppState>); 5] = [
        (Method::POST, "/login", post(login)),
        (Method::GET, "/users", get(list_users)),
        (Method::POST, "/users", post(create_user)),
        (Method::PUT, "/users/:id", put(update_user)),
        (Method::DELETE, "/users/:id", delete(delete_user)),
    ];

    let api_routes = endpoints
        .into_iter()
        .fold(Router::new(), |router, (method, path, handler)| {
            let handler = match access_for(&method, path) {
                Access::Public => handler,
                Access::Bearer => handler.route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
            };
            router.route(path, handler)
        });

    let docs_routes = Router::new()
        .route("/api-docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_json));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .merge(docs_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
