use crate::configuration::Settings;
use crate::models;
use crate::services::token;
use actix_web::http::header;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

/// Name of the session cookie set at sign-in and cleared at sign-out.
pub const TOKEN_COOKIE: &str = "token";

fn token_from_cookies(req: &ServiceRequest) -> Result<Option<String>, String> {
    let Some(header_value) = req.headers().get(header::COOKIE) else {
        return Ok(None);
    };
    let cookies = header_value
        .to_str()
        .map_err(|_| "cookie header is not valid utf-8".to_string())?;

    Ok(cookies.split(';').find_map(|cookie| {
        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
        if parts.len() == 2 && parts[0] == TOKEN_COOKIE {
            Some(parts[1].to_string())
        } else {
            None
        }
    }))
}

#[tracing::instrument(name = "Authenticate with token cookie")]
pub fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let Some(token) = token_from_cookies(req)? else {
        return Ok(false);
    };

    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or("application settings are not configured")?;
    let claims =
        token::verify(&token, &settings.auth.token_secret).map_err(|err| format!("{err}"))?;

    let user = models::User::from(claims);
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}
