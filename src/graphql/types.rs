use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ErrorExtensions, InputObject, Result, SimpleObject, ID};
use mongodb::bson::oid::ObjectId;

use crate::models::{Booking, Event, User};
use crate::store::EntityStore;

use super::loaders::{EventLoader, UserLoader};

#[derive(Debug, SimpleObject)]
pub struct AuthData {
    pub user_id: ID,
    pub token: String,
    /// Token lifetime in hours.
    pub token_exp: i32,
}

/// Input payload for creating events
#[derive(Debug, InputObject)]
pub struct EventInput {
    pub creator_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
}

/// Input payload for deleting an event
#[derive(Debug, InputObject)]
pub struct DeleteEventInput {
    #[graphql(name = "_id")]
    pub id: String,
    /// Accepted for compatibility; ownership is not checked at this layer.
    pub creator_id: String,
}

/// Input payload for creating a new user
#[derive(Debug, InputObject)]
#[graphql(name = "UserInput")]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avator: String,
}

/// Input payload for logging in a user
#[derive(Debug, InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Input payload for creating a new booking
#[derive(Debug, InputObject)]
pub struct CreateBookingInput {
    pub event_id: String,
    pub user_id: String,
}

// Relational fields. Each one is resolved lazily, only when selected, and
// fetches through the store; a reference that no longer (or never) points at
// a document resolves to null instead of failing the whole response.

#[ComplexObject]
impl Event {
    async fn creator(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let id = match ObjectId::parse_str(&self.creator_id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        loader.load_one(id).await.map_err(|e| (*e).extend())
    }

    async fn bookings(&self, ctx: &Context<'_>) -> Result<Vec<Booking>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store
            .bookings_by_event(&self.id.to_hex())
            .await
            .map_err(|e| e.extend())
    }
}

#[ComplexObject]
impl User {
    async fn created_events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store
            .events_by_creator(&self.id.to_hex())
            .await
            .map_err(|e| e.extend())
    }
}

#[ComplexObject]
impl Booking {
    async fn event(&self, ctx: &Context<'_>) -> Result<Option<Event>> {
        let loader = ctx.data::<DataLoader<EventLoader>>()?;
        let id = match ObjectId::parse_str(&self.event_id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        loader.load_one(id).await.map_err(|e| (*e).extend())
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let id = match ObjectId::parse_str(&self.user_id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        loader.load_one(id).await.map_err(|e| (*e).extend())
    }
}
