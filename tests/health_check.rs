mod common;

#[tokio::test]
async fn liveness_returns_the_server_banner() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!("ElectroEvo server", response.text().await.unwrap());
}
