mod common;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

fn craft_token(email: &str, expires_in: Duration, secret: &str) -> String {
    let now = Utc::now();
    let claims = json!({
        "email": email,
        "iat": now.timestamp(),
        "exp": (now + expires_in).timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

const GUARDED_PATHS: [&str; 3] = [
    "/queries/email/a@x.com",
    "/recommend/myRecommrnd/a@x.com",
    "/recommend/RecommendForMe/a@x.com",
];

#[tokio::test]
async fn guarded_routes_reject_requests_without_a_cookie() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    for path in GUARDED_PATHS {
        let response = client
            .get(format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(401, response.status().as_u16(), "path: {}", path);

        let body = response
            .json::<serde_json::Value>()
            .await
            .expect("Response should be valid JSON");
        assert_eq!("unauthorized access", body["message"], "path: {}", path);
    }
}

#[tokio::test]
async fn guarded_routes_reject_an_expired_token() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    let token = craft_token("a@x.com", Duration::hours(-2), common::TEST_SECRET);

    let response = client
        .get(format!("{}/queries/email/a@x.com", app.address))
        .header("Cookie", format!("token={}", token))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn guarded_routes_reject_a_token_signed_with_another_secret() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    let token = craft_token("a@x.com", Duration::days(1), "some-other-secret");

    let response = client
        .get(format!("{}/queries/email/a@x.com", app.address))
        .header("Cookie", format!("token={}", token))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn guarded_routes_reject_an_identity_that_does_not_own_the_resource() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    let token = craft_token("b@x.com", Duration::days(1), common::TEST_SECRET);

    for path in GUARDED_PATHS {
        let response = client
            .get(format!("{}{}", app.address, path))
            .header("Cookie", format!("token={}", token))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(403, response.status().as_u16(), "path: {}", path);

        let body = response
            .json::<serde_json::Value>()
            .await
            .expect("Response should be valid JSON");
        assert_eq!("forbidden access", body["message"], "path: {}", path);
    }
}
