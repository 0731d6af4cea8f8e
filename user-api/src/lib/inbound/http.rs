//! HTTP surface: routes, their access policy, the bearer-token gate and API docs.

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
