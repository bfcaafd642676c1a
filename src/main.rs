use actix_web::{App, HttpServer, middleware, web};

use nyc311_dashboard::config::AppConfig;
use nyc311_dashboard::handlers;
use nyc311_dashboard::models::{consistency, Dataset};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // A malformed literal is a build mistake; refuse to serve it.
    let dataset = Dataset::load().map_err(|e| {
        log::error!("Embedded tables failed to load: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    let report = consistency::check(&dataset);
    for issue in &report.issues {
        log::warn!("Consistency: {} [{}] {}", issue.table, issue.row, issue.message);
    }
    log::info!(
        "Loaded {} daily rows, {} complaint types, {} agencies ({} requests unattributed to a listed borough)",
        dataset.daily.len(),
        dataset.complaints.len(),
        dataset.agencies.len(),
        report.unattributed_borough
    );

    log::info!("Starting server at {}", config.public_url());

    let bind_addr = config.bind_addr();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
