mod common;

use serde_json::json;

#[tokio::test]
async fn sign_in_sets_the_token_cookie() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/jwt", app.address))
        .json(&json!({ "email": "a@x.com", "displayName": "A" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("SameSite=None"));

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(json!({ "success": true }), body);
}

#[tokio::test]
async fn issued_cookie_carries_a_verifiable_token() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/jwt", app.address))
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await
        .expect("Failed to execute request.");

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap();
    let token = set_cookie
        .trim_start_matches("token=")
        .split(';')
        .next()
        .unwrap();

    let claims = electroevo::services::token::verify(token, common::TEST_SECRET)
        .expect("Cookie token should verify against the configured secret");
    assert_eq!("a@x.com", claims.email);
}

#[tokio::test]
async fn sign_out_expires_the_cookie_immediately() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/signout", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Response should be valid JSON");
    assert_eq!(json!({ "success": true }), body);
}
