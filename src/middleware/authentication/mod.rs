mod manager;
mod manager_middleware;
mod method;

pub use manager::*;
pub use manager_middleware::*;
pub use method::TOKEN_COOKIE;

use crate::errors::ApiError;
use crate::models;
use std::sync::Arc;

/// Precondition for routes exposing a user's private listings: the request
/// must carry a verified identity and that identity must own the resource
/// named by the path email.
pub fn require_owner(
    user: Option<Arc<models::User>>,
    email: &str,
) -> Result<Arc<models::User>, ApiError> {
    let user = user.ok_or(ApiError::Unauthorized)?;
    if user.email != email {
        return Err(ApiError::Forbidden);
    }

    Ok(user)
}
