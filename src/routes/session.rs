use crate::configuration::Settings;
use crate::errors::ApiError;
use crate::forms;
use crate::middleware::authentication::TOKEN_COOKIE;
use crate::services::token;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};

// The client and server run on different origins, so the session cookie has
// to be sent cross-site: SameSite=None requires Secure.

#[tracing::instrument(name = "Issue session token.", skip(settings))]
#[post("/jwt")]
pub async fn issue_handler(
    form: web::Json<forms::SessionStart>,
    settings: web::Data<Settings>,
) -> Result<impl Responder, ApiError> {
    let token = token::issue(&form.into_inner(), &settings.auth.token_secret)?;
    let cookie = Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true })))
}

#[tracing::instrument(name = "Sign out.")]
#[post("/signout")]
pub async fn signout_handler() -> Result<impl Responder, ApiError> {
    let cookie = Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::ZERO)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true })))
}
