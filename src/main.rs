use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use lume_search_filters::config::Settings;
use lume_search_filters::routes::{self, handle_json_payload_error, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Lume search filter service...");

    let sync = settings.filter_form_sync();
    let options = sync.options();
    if options.hometown_filters.is_empty()
        || options.work_filters.is_empty()
        || options.education_filters.is_empty()
    {
        warn!("One or more filter allow-lists are empty; every value for those fields will be rejected");
    }

    info!(
        "Filter allow-lists loaded (hometowns: {}, work: {}, education: {}), search path: {}",
        options.hometown_filters.len(),
        options.work_filters.len(),
        options.education_filters.len(),
        sync.search_path()
    );

    let app_state = AppState::new(sync);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
