use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::path::PathBuf;

async fn spa() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/
    let addr = std::env::var("OAGR_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_owned());
    log::info!("serving on http://{addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // top-level static assets (logo, stylesheet)
            .service(Files::new("/assets", root.join("../assets")))
            // the SPA bundle built by Trunk
            .service(Files::new("/", "../dist").index_file("index.html"))
            // fallback -> SPA for client-side routes
            .default_service(web::get().to(spa))
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?
    .run()
    .await?;

    Ok(())
}
