use actix_web::{middleware, web, App, HttpServer};

use collab_admin::config::AppConfig;
use collab_admin::state::AppState;
use collab_admin::{handlers, session_middleware, store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let store = store::load(config.seed_file.as_deref()).map_err(std::io::Error::other)?;
    let secret_key = config.cookie_key();
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(store, config));

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
