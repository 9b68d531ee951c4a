use crate::services::token::Claims;
use serde::Deserialize;

/// The verified identity the authentication middleware hands to guarded
/// handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub email: String,
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        User {
            email: claims.email,
        }
    }
}
