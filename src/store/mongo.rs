use async_trait::async_trait;
use chrono::Utc;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::{Booking, Event, NewBooking, NewEvent, NewUser, User};
use crate::utils::error::AppError;

use super::EntityStore;

pub struct MongoStore {
    events: Collection<Event>,
    users: Collection<User>,
    bookings: Collection<Booking>,
}

impl MongoStore {
    pub fn new(database: &Database) -> Self {
        Self {
            events: database.collection("events"),
            users: database.collection("users"),
            bookings: database.collection("bookings"),
        }
    }
}

#[async_trait]
impl EntityStore for MongoStore {
    async fn create_event(&self, input: NewEvent) -> Result<Event, AppError> {
        let event = Event {
            id: ObjectId::new(),
            title: input.title,
            description: input.description,
            price: input.price,
            date: input.date,
            creator_id: input.creator_id,
        };
        self.events.insert_one(&event, None).await?;
        Ok(event)
    }

    async fn events(&self) -> Result<Vec<Event>, AppError> {
        let cursor = self.events.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn event_by_id(&self, id: &ObjectId) -> Result<Option<Event>, AppError> {
        Ok(self.events.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn events_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Event>, AppError> {
        let cursor = self
            .events
            .find(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn events_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, AppError> {
        let cursor = self
            .events
            .find(doc! { "creatorId": creator_id }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_event(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.events.delete_one(doc! { "_id": *id }, None).await?;
        Ok(result.deleted_count == 1)
    }

    async fn create_user(&self, input: NewUser) -> Result<User, AppError> {
        let user = User {
            id: ObjectId::new(),
            email: input.email,
            password: input.password,
            username: input.username,
            avator: input.avator,
        };
        self.users.insert_one(&user, None).await?;
        Ok(user)
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        let cursor = self
            .users
            .find(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }, None).await?)
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
        self.bookings.insert_one(&booking, None).await?;
        Ok(booking)
    }

    async fn bookings(&self) -> Result<Vec<Booking>, AppError> {
        let cursor = self.bookings.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn booking_by_id(&self, id: &ObjectId) -> Result<Option<Booking>, AppError> {
        Ok(self.bookings.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn bookings_by_event(&self, event_id: &str) -> Result<Vec<Booking>, AppError> {
        let cursor = self
            .bookings
            .find(doc! { "eventId": event_id }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        let cursor = self.bookings.find(doc! { "userId": user_id }, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_booking(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.bookings.delete_one(doc! { "_id": *id }, None).await?;
        Ok(result.deleted_count == 1)
    }
}
