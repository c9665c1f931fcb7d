use std::sync::Arc;

use axum::{extract::State, response::Html};
use stone_eng_frontend::AppProps;

use crate::content::gallery::load_gallery;
use crate::error::AppError;
use crate::render::render_page;
use crate::AppState;

/// Landing page. Rendering waits for the gallery; a failed fetch fails the request.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let gallery = load_gallery(state.content).await?;
    tracing::info!("Rendering landing page with {} gallery entries", gallery.len());

    let page = render_page(AppProps {
        gallery,
        options: state.site.clone(),
    })
    .await?;
    Ok(Html(page))
}
