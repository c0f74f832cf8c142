pub mod password;
pub mod token;

pub use token::{Claims, TokenIssuer, TOKEN_TTL_HOURS};

/// Per-request authentication state derived from the Authorization header.
/// Resolvers only ever read it; a missing or invalid token just leaves the
/// flag unset instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub is_auth: bool,
    pub user_id: Option<String>,
}
