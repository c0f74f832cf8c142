//! In-memory stand-in for the Mongo collections, used by schema tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::models::{Booking, Event, NewBooking, NewEvent, NewUser, User};
use crate::utils::error::AppError;

use super::EntityStore;

#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
    users: RwLock<Vec<User>>,
    bookings: RwLock<Vec<Booking>>,
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn create_event(&self, input: NewEvent) -> Result<Event, AppError> {
        let event = Event {
            id: ObjectId::new(),
            title: input.title,
            description: input.description,
            price: input.price,
            date: input.date,
            creator_id: input.creator_id,
        };
        self.events.write().unwrap().push(event.clone());
        Ok(event)
    }

    async fn events(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.read().unwrap().clone())
    }

    async fn event_by_id(&self, id: &ObjectId) -> Result<Option<Event>, AppError> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == *id)
            .cloned())
    }

    async fn events_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Event>, AppError> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }

    async fn events_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, AppError> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn delete_event(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut events = self.events.write().unwrap();
        let before = events.len();
        events.retain(|e| e.id != *id);
        Ok(events.len() < before)
    }

    async fn create_user(&self, input: NewUser) -> Result<User, AppError> {
        let user = User {
            id: ObjectId::new(),
            email: input.email,
            password: input.password,
            username: input.username,
            avator: input.avator,
        };
        self.users.write().unwrap().push(user.clone());
        Ok(user)
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().unwrap().clone())
    }

    async fn user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, AppError> {
        let now = Utc::now();
        let booking = Booking {
            id: ObjectId::new(),
            event_id: input.event_id,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        self.bookings.write().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn bookings(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().unwrap().clone())
    }

    async fn booking_by_id(&self, id: &ObjectId) -> Result<Option<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .unwrap()
            .iter()
            .find(|b| b.id == *id)
            .cloned())
    }

    async fn bookings_by_event(&self, event_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_booking(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut bookings = self.bookings.write().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != *id);
        Ok(bookings.len() < before)
    }
}
