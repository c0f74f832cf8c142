use async_graphql::SimpleObject;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// `avator` keeps the spelling used by the stored documents and the wire
// contract; renaming it would break existing clients.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct User {
    #[serde(rename = "_id")]
    #[graphql(name = "_id")]
    pub id: ObjectId,
    pub email: String,
    /// bcrypt hash, never the plaintext password.
    pub password: String,
    pub username: String,
    pub avator: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Already hashed by the caller.
    pub password: String,
    pub avator: String,
}
