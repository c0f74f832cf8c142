//! Batched id lookups so sibling fields in one response share a fetch
//! instead of issuing one query per entity.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use mongodb::bson::oid::ObjectId;

use crate::models::{Event, User};
use crate::store::EntityStore;
use crate::utils::error::AppError;

pub struct EventLoader {
    store: Arc<dyn EntityStore>,
}

impl EventLoader {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

impl Loader<ObjectId> for EventLoader {
    type Value = Event;
    type Error = Arc<AppError>;

    async fn load(&self, keys: &[ObjectId]) -> Result<HashMap<ObjectId, Event>, Self::Error> {
        let events = self.store.events_by_ids(keys).await.map_err(Arc::new)?;
        Ok(events.into_iter().map(|event| (event.id, event)).collect())
    }
}

pub struct UserLoader {
    store: Arc<dyn EntityStore>,
}

impl UserLoader {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

impl Loader<ObjectId> for UserLoader {
    type Value = User;
    type Error = Arc<AppError>;

    async fn load(&self, keys: &[ObjectId]) -> Result<HashMap<ObjectId, User>, Self::Error> {
        let users = self.store.users_by_ids(keys).await.map_err(Arc::new)?;
        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }
}
