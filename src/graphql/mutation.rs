use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::auth::{password, TokenIssuer, TOKEN_TTL_HOURS};
use crate::models::{Booking, Event, NewBooking, NewEvent, NewUser, User};
use crate::store::{parse_id, EntityStore};
use crate::utils::error::AppError;

use super::types::{
    AuthData, CreateBookingInput, DeleteEventInput, EventInput, LoginInput, RegisterUserInput,
};

pub struct Mutation;

#[Object]
impl Mutation {
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<AuthData> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        let tokens = ctx.data::<Arc<TokenIssuer>>()?;

        let user = store
            .user_by_email(&input.email)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| AppError::Auth("User does not exist!".to_string()).extend())?;

        if !password::verify(&input.password, &user.password) {
            return Err(AppError::Auth("Password is incorrect!".to_string()).extend());
        }

        auth_payload(tokens, &user)
    }

    async fn register_user(&self, ctx: &Context<'_>, input: RegisterUserInput) -> Result<AuthData> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;
        let tokens = ctx.data::<Arc<TokenIssuer>>()?;

        // Uniqueness is only this pre-check; two concurrent registrations can
        // still race each other.
        if store
            .user_by_email(&input.email)
            .await
            .map_err(|e| e.extend())?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Account already exists with the same email!".to_string(),
            )
            .extend());
        }

        let hashed = password::hash(&input.password).map_err(|e| e.extend())?;
        let user = store
            .create_user(NewUser {
                username: input.username,
                email: input.email,
                password: hashed,
                avator: input.avator,
            })
            .await
            .map_err(|e| e.extend())?;

        auth_payload(tokens, &user)
    }

    async fn create_event(&self, ctx: &Context<'_>, input: EventInput) -> Result<Event> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;

        if input.title.trim().is_empty() {
            return Err(
                AppError::Validation("Event title must not be empty".to_string()).extend(),
            );
        }

        let creator_id = parse_id(&input.creator_id, "user").map_err(|e| e.extend())?;
        if store
            .user_by_id(&creator_id)
            .await
            .map_err(|e| e.extend())?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User with id '{}' was not found",
                input.creator_id
            ))
            .extend());
        }

        store
            .create_event(NewEvent {
                title: input.title,
                description: input.description,
                price: input.price,
                date: input.date,
                creator_id: input.creator_id,
            })
            .await
            .map_err(|e| e.extend())
    }

    /// Deletes an event by id and returns it. `creatorId` is accepted but no
    /// ownership check happens here.
    async fn delete_event(&self, ctx: &Context<'_>, input: DeleteEventInput) -> Result<Event> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;

        let id = parse_id(&input.id, "event").map_err(|e| e.extend())?;
        let not_found =
            || AppError::NotFound(format!("Event with id '{}' was not found", input.id)).extend();

        let event = store
            .event_by_id(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| not_found())?;
        if !store.delete_event(&id).await.map_err(|e| e.extend())? {
            return Err(not_found());
        }
        Ok(event)
    }

    async fn create_booking(&self, ctx: &Context<'_>, input: CreateBookingInput) -> Result<Booking> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;

        let event_id = parse_id(&input.event_id, "event").map_err(|e| e.extend())?;
        if store
            .event_by_id(&event_id)
            .await
            .map_err(|e| e.extend())?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Event with id '{}' was not found",
                input.event_id
            ))
            .extend());
        }

        let user_id = parse_id(&input.user_id, "user").map_err(|e| e.extend())?;
        if store
            .user_by_id(&user_id)
            .await
            .map_err(|e| e.extend())?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User with id '{}' was not found",
                input.user_id
            ))
            .extend());
        }

        store
            .create_booking(NewBooking {
                event_id: input.event_id,
                user_id: input.user_id,
            })
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_booking(&self, ctx: &Context<'_>, booking_id: String) -> Result<Booking> {
        let store = ctx.data::<Arc<dyn EntityStore>>()?;

        let id = parse_id(&booking_id, "booking").map_err(|e| e.extend())?;
        let not_found =
            || AppError::NotFound(format!("Booking with id '{}' was not found", booking_id)).extend();

        let booking = store
            .booking_by_id(&id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| not_found())?;
        if !store.delete_booking(&id).await.map_err(|e| e.extend())? {
            return Err(not_found());
        }
        Ok(booking)
    }
}

fn auth_payload(tokens: &Arc<TokenIssuer>, user: &User) -> Result<AuthData> {
    let token = tokens.issue(user).map_err(|e| e.extend())?;
    Ok(AuthData {
        user_id: ID::from(user.id.to_hex()),
        token,
        token_exp: TOKEN_TTL_HOURS as i32,
    })
}
