use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::auth::AuthSession;
use crate::models::{Booking, Event, User};
use crate::store::{parse_id, EntityStore};
use crate::utils::error::AppError;

pub struct Query;

#[Object]
impl Query {
    /// All events.
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store.events().await.map_err(|e| e.extend())
    }

    /// A single event by id, or null when it does not exist.
    async fn get_event(&self, ctx: &Context<'_>, event_id: ID) -> Result<Option<Event>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        let id = parse_id(&event_id, "event").map_err(|e| e.extend())?;
        store.event_by_id(&id).await.map_err(|e| e.extend())
    }

    /// All users.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store.users().await.map_err(|e| e.extend())
    }

    /// All bookings. Requires an authenticated session.
    async fn bookings(&self, ctx: &Context<'_>) -> Result<Vec<Booking>> {
        let is_auth = ctx
            .data_opt::<AuthSession>()
            .map(|session| session.is_auth)
            .unwrap_or(false);
        if !is_auth {
            return Err(AppError::Unauthenticated.extend());
        }
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store.bookings().await.map_err(|e| e.extend())
    }

    /// Bookings made by one user.
    async fn user_bookings(&self, ctx: &Context<'_>, user_id: String) -> Result<Vec<Booking>> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        store.bookings_by_user(&user_id).await.map_err(|e| e.extend())
    }
}
