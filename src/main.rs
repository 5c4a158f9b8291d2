use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use vitrina::catalog::RestCatalog;
use vitrina::models::config::ServerConfig;
use vitrina::routes::products::{create_product, new_product, show_product, show_products};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new("templates/**/*.html") {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            std::process::exit(1);
        }
    };

    let catalog = RestCatalog::new(config.catalog_url.clone());

    // Flash messages only need to survive the redirect after a create, so a
    // per-process key is enough.
    let message_store = CookieMessageStore::builder(Key::generate()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    log::info!(
        "Starting server on {}:{} against {}",
        config.bind_address,
        config.port,
        config.catalog_url
    );

    let bind_address = (config.bind_address.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .service(show_products)
            .service(new_product)
            .service(create_product)
            .service(show_product)
            .service(Files::new("/static", "./static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
