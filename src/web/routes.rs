use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::web;

use portfolio::config::ServerConfig;

/// Directories served verbatim from the site root.
pub const STATIC_MOUNTS: [&str; 5] = ["data", "images", "docs", "pkg", "style"];

/// Mounts the static directories and answers every other GET with
/// `index.html` so the client router can resolve the path.
pub fn configure(cfg: &mut web::ServiceConfig, config: &ServerConfig) {
    for mount in STATIC_MOUNTS {
        cfg.service(
            Files::new(&format!("/{mount}"), config.site_root.join(mount)).prefer_utf8(true),
        );
    }

    let index = config.index_file();
    cfg.service(
        Files::new("/", &config.site_root)
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
    );
}
