use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use crate::auth::TokenIssuer;
use crate::store::EntityStore;

mod loaders;
mod mutation;
mod query;
mod types;

pub use mutation::Mutation;
pub use query::Query;
pub use types::AuthData;

use loaders::{EventLoader, UserLoader};

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Built once at startup; operations, argument shapes and resolvers are
/// fixed from here on.
pub fn build_schema(store: Arc<dyn EntityStore>, tokens: Arc<TokenIssuer>) -> AppSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(DataLoader::new(EventLoader::new(store.clone()), tokio::spawn))
        .data(DataLoader::new(UserLoader::new(store.clone()), tokio::spawn))
        .data(store)
        .data(tokens)
        .finish()
}
