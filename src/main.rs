use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use premios::clock::{Clock, SystemClock};
use premios::config::AppConfig;
use premios::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Ensure data directory exists for the default SQLite file
    std::fs::create_dir_all("data")?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to create DB pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if config.seed_demo {
        db::seed_demo(&pool, clock.now())
            .await
            .expect("Failed to seed demo polls");
    }

    let secret_key = config.cookie_key();
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);
    let clock = web::Data::from(clock);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(clock.clone())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
