mod config;
mod error;
mod services;
mod text_store;

use std::thread;
use std::time::Duration;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::ServerConfig;
use crate::text_store::state::TextsState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    if !config.static_dir.join("index.html").is_file() {
        warn!(
            "{} has no index.html, only the API will be useful",
            config.static_dir.display()
        );
    }

    let texts_state = TextsState::default();
    let static_dir = config.static_dir.clone();

    info!("Server running at {}", url);

    HttpServer::new(move || {
        let index = static_dir.join("index.html");
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(texts_state.clone()))
            .service(services::texts::configure_routes())
            .service(services::texts::configure_pages())
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
