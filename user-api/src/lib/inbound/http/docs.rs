//! Interactive API documentation.
//!
//! The OpenAPI document is assembled from per-operation descriptors; the
//! `security` requirement of each operation comes from the route policy
//! table, so the docs cannot drift from what the router enforces.

use axum::response::Html;
use axum::Json;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

use super::router::access_for;
use super::router::Access;
use super::router::ROUTE_POLICIES;

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>User API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI 3.0 document for every route in the policy table.
pub fn openapi_document() -> Value {
    let mut paths = Map::new();

    for policy in ROUTE_POLICIES.iter() {
        let mut operation = describe(policy.method.as_str(), policy.path);
        if access_for(&policy.method, policy.path) == Access::Bearer {
            operation["security"] = json!([{ "BearerAuth": [] }]);
        }

        let entry = paths
            .entry(openapi_path(policy.path))
            .or_insert_with(|| Value::Object(Map::new()));
        entry[policy.method.as_str().to_lowercase()] = operation;
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "User API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "User records with password login and token-gated listing.",
        },
        "components": {
            "securitySchemes": {
                "BearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            }
        },
        "paths": paths,
    })
}

/// `/users/:id` -> `/users/{id}`
fn openapi_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn user_fields() -> Value {
    json!({
        "type": "object",
        "properties": {
            "nome": { "type": "string" },
            "email": { "type": "string" },
            "password": { "type": "string" }
        }
    })
}

fn id_parameter() -> Value {
    json!([{
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "integer" }
    }])
}

fn describe(method: &str, path: &str) -> Value {
    match (method, path) {
        ("POST", "/login") => json!({
            "description": "Authenticate with email and password and obtain a bearer token",
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": {
                    "type": "object",
                    "properties": {
                        "email": { "type": "string" },
                        "password": { "type": "string" }
                    }
                }}}
            },
            "responses": {
                "200": { "description": "Token issued" },
                "400": { "description": "Invalid credentials or user not found" }
            }
        }),
        ("GET", "/users") => json!({
            "description": "List registered users",
            "responses": {
                "200": { "description": "User list" },
                "403": { "description": "Token missing or invalid" }
            }
        }),
        ("POST", "/users") => json!({
            "description": "Register a user",
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": user_fields() } }
            },
            "responses": {
                "201": { "description": "User created" },
                "400": { "description": "Name, email or password missing" }
            }
        }),
        ("PUT", "/users/:id") => json!({
            "description": "Update a user by id",
            "parameters": id_parameter(),
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": user_fields() } }
            },
            "responses": {
                "200": { "description": "User updated" },
                "404": { "description": "User not found" }
            }
        }),
        ("DELETE", "/users/:id") => json!({
            "description": "Remove a user by id",
            "parameters": id_parameter(),
            "responses": {
                "204": { "description": "User removed" },
                "404": { "description": "User not found" }
            }
        }),
        _ => json!({ "responses": {} }),
    }
}
