use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, http, web, App, HttpServer};
use mongodb::Database;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    db: Database,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let db = web::Data::new(db);

    let server = HttpServer::new(move || {
        // Only the fixed allow-list of client origins may send credentialed
        // (cookie-bearing) requests.
        let cors = settings
            .cors
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .supports_credentials();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(cors)
            .service(routes::index)
            .service(routes::session::issue_handler)
            .service(routes::session::signout_handler)
            .service(
                web::scope("/queries")
                    .service(routes::queries::list_handler)
                    .service(routes::queries::owner_list_handler)
                    .service(routes::queries::add_handler)
                    .service(routes::queries::replace_handler)
                    .service(routes::queries::decrement_count_handler)
                    .service(routes::queries::increment_count_handler)
                    .service(routes::queries::item_handler)
                    .service(routes::queries::delete_handler),
            )
            .service(
                web::scope("/recommend")
                    .service(routes::recommend::list_handler)
                    .service(routes::recommend::endorser_list_handler)
                    .service(routes::recommend::target_list_handler)
                    .service(routes::recommend::add_handler)
                    .service(routes::recommend::by_query_list_handler)
                    .service(routes::recommend::delete_handler),
            )
            .app_data(db.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
