use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{Booking, Event, NewBooking, NewEvent, NewUser, User};
use crate::utils::error::AppError;

#[cfg(test)]
pub(crate) mod memory;
mod mongo;

pub use mongo::MongoStore;

/// Per-collection access to the document store. Every read re-fetches; the
/// service layer keeps no authoritative in-memory copy.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_event(&self, input: NewEvent) -> Result<Event, AppError>;
    async fn events(&self) -> Result<Vec<Event>, AppError>;
    async fn event_by_id(&self, id: &ObjectId) -> Result<Option<Event>, AppError>;
    async fn events_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Event>, AppError>;
    async fn events_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, AppError>;
    async fn delete_event(&self, id: &ObjectId) -> Result<bool, AppError>;

    async fn create_user(&self, input: NewUser) -> Result<User, AppError>;
    async fn users(&self) -> Result<Vec<User>, AppError>;
    async fn user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;
    async fn users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, AppError>;
    async fn bookings(&self) -> Result<Vec<Booking>, AppError>;
    async fn booking_by_id(&self, id: &ObjectId) -> Result<Option<Booking>, AppError>;
    async fn bookings_by_event(&self, event_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn delete_booking(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// Parses the hex id callers send for arguments that must name a document.
pub fn parse_id(value: &str, entity: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid {} id", value, entity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_roundtrip() {
        let id = ObjectId::new();
        assert_eq!(parse_id(&id.to_hex(), "event").unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("E1", "event").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
