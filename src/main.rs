use electroevo::configuration::get_configuration;
use electroevo::startup::run;
use electroevo::telemetry::{get_subscriber, init_subscriber};
use mongodb::Client;
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("electroevo".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        db_host = %settings.database.host,
        db_name = %settings.database.database_name,
        "Connecting to MongoDB"
    );

    // The driver connects lazily; construction only validates the URI.
    let client = Client::with_uri_str(settings.database.connection_string())
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let db = client.database(&settings.database.database_name);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .expect(&format!("failed to bind to {}", settings.app_port));

    run(listener, db, settings).await?.await?;

    // The server has drained its workers; release the connection pool too.
    client.shutdown().await;

    Ok(())
}
