use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::utils::error::AppError;

use super::AuthSession;

pub const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub avator: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies session tokens with the process-wide secret, loaded
/// once at startup.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id: user.id.to_hex(),
            email: user.email.clone(),
            avator: user.avator.clone(),
            iat: now,
            exp: now + TOKEN_TTL_HOURS * 3600,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AppError::Internal(format!("failed to sign token: {}", err)))
    }

    pub fn verify(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .ok()
    }

    /// Mirrors the HTTP auth gate: `Authorization: Bearer <token>`. Anything
    /// missing or invalid leaves the session unauthenticated.
    pub fn session_from_headers(&self, headers: &HeaderMap) -> AuthSession {
        let header = match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            Some(value) => value,
            None => return AuthSession::default(),
        };
        let token = match header.strip_prefix("Bearer ") {
            Some(token) if !token.is_empty() => token,
            _ => return AuthSession::default(),
        };
        match self.verify(token) {
            Some(claims) => AuthSession {
                is_auth: true,
                user_id: Some(claims.user_id),
            },
            None => AuthSession::default(),
        }
    }
}
