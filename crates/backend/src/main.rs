pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory for the file layer
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, mute SQL chatter
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: method, path, status, duration
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let duration = start.elapsed();
        if status < 400 {
            tracing::info!("{} {} {} {}ms", status, method, path, duration.as_millis());
        } else {
            tracing::warn!("{} {} {} {}ms", status, method, path, duration.as_millis());
        }
        response
    }

    // Load config and initialize the database
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Ensure the site settings singleton exists
    system::site_settings::service::get().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM ROUTES
        // ========================================
        .route(
            "/api/system/site-settings",
            get(handlers::site_settings::get).put(handlers::site_settings::update),
        )
        // ========================================
        // CONTENT ROUTES (k001-k003)
        // ========================================
        .route(
            "/api/knowledge-item",
            get(handlers::k001_knowledge_item::list_all).post(handlers::k001_knowledge_item::upsert),
        )
        .route(
            "/api/knowledge-item/:id",
            get(handlers::k001_knowledge_item::get_by_id)
                .delete(handlers::k001_knowledge_item::delete),
        )
        .route(
            "/api/event",
            get(handlers::k002_event::list_all).post(handlers::k002_event::upsert),
        )
        .route(
            "/api/event/:id",
            get(handlers::k002_event::get_by_id).delete(handlers::k002_event::delete),
        )
        .route(
            "/api/blog-post",
            get(handlers::k003_blog_post::list_all).post(handlers::k003_blog_post::upsert),
        )
        .route(
            "/api/blog-post/:id",
            get(handlers::k003_blog_post::get_by_id).delete(handlers::k003_blog_post::delete),
        )
        // ========================================
        // SITE COMPOSITION ROUTES (k004-k005)
        // ========================================
        .route(
            "/api/template",
            get(handlers::k004_template::list_all).post(handlers::k004_template::upsert),
        )
        .route(
            "/api/template/:id",
            get(handlers::k004_template::get_by_id).delete(handlers::k004_template::delete),
        )
        .route(
            "/api/template/testdata",
            post(handlers::k004_template::insert_test_data),
        )
        .route(
            "/api/page",
            get(handlers::k005_page::list_all).post(handlers::k005_page::upsert),
        )
        .route(
            "/api/page/:id",
            get(handlers::k005_page::get_by_id).delete(handlers::k005_page::delete),
        )
        .route("/api/page/by-slug/:slug", get(handlers::k005_page::get_by_slug))
        // ========================================
        // LISTINGS
        // ========================================
        .route("/api/recommendations", post(handlers::recommendations::list))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("backend listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
