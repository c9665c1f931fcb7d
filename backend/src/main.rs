use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use stone_eng_frontend::models::SiteOptions;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config {
    pub mod settings;
}
mod content {
    pub mod client;
    pub mod gallery;
}
mod handlers {
    pub mod mail_handlers;
    pub mod page_handlers;
}
mod mail {
    pub mod mailer;
    pub mod templates;
}
mod error;
mod render;
#[cfg(test)]
mod test_support;

use config::settings::Config;
use content::client::ContentClient;
use handlers::mail_handlers;
use handlers::page_handlers;
use mail::mailer::{Mailer, ResendMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    content: &'static ContentClient,
    mailer: Arc<dyn Mailer>,
    mail_owner: String,
    site: SiteOptions,
}

pub fn router(state: Arc<AppState>, public_dir: &Path, pkg_dir: &Path) -> Router {
    Router::new()
        .route("/", get(page_handlers::home))
        .route("/api/health", get(health_check))
        .route("/api/mail", post(mail_handlers::send_mail))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = Arc::new(AppState {
        content: content::client::init(&config.cms_service_domain, &config.cms_api_key),
        mailer: Arc::new(ResendMailer::new(&config.resend_api_key, &config.mail_from)),
        mail_owner: config.mail_owner.clone(),
        site: config.site.clone(),
    });

    let app = router(state, &config.public_dir, &config.pkg_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
