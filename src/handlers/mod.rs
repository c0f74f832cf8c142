use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;

use crate::routes::AppState;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthPayload {
        status: "ok",
        service: "eventbook-api",
    })
}

/// Single GraphQL endpoint. The Authorization header is turned into the
/// request's auth session before execution; resolvers read the flag, the
/// handler never rejects by itself.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let session = state.tokens.session_from_headers(&headers);
    state
        .schema
        .execute(req.into_inner().data(session))
        .await
        .into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
