use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::TokenIssuer;
use crate::config::create_cors_layer;
use crate::graphql::AppSchema;
use crate::handlers::{graphiql, graphql_handler, health_check};

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub tokens: Arc<TokenIssuer>,
}

pub fn create_routes(schema: AppSchema, tokens: Arc<TokenIssuer>) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphiql))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(AppState { schema, tokens })
}
