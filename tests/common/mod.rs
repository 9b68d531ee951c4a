use electroevo::configuration::{AuthSettings, CorsSettings, DatabaseSettings, Settings};
use mongodb::Client;
use std::net::TcpListener;

pub const TEST_SECRET: &str = "test-access-token-secret";

pub struct TestApp {
    pub address: String,
}

fn test_configuration() -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        database: DatabaseSettings {
            username: String::new(),
            password: String::new(),
            host: "127.0.0.1".to_string(),
            database_name: "queriesDB_test".to_string(),
        },
        auth: AuthSettings {
            token_secret: TEST_SECRET.to_string(),
        },
        cors: CorsSettings {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = test_configuration();

    // The driver connects lazily, so no MongoDB deployment is needed for the
    // routes these tests exercise.
    let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .expect("Failed to build MongoDB client");
    let db = client.database(&configuration.database.database_name);

    let server = electroevo::startup::run(listener, db, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}
