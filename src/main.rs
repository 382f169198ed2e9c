mod web;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use portfolio::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio=info,actix_web=info")),
        )
        .init();

    let config = ServerConfig::from_env()
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        site_root = %config.site_root.display(),
        "serving portfolio"
    );

    let bind_addr = config.bind_addr;
    HttpServer::new(move || {
        let config = config.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(web::middleware::StaticHeaders)
            .configure(move |cfg| web::routes::configure(cfg, &config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
