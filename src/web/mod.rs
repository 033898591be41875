pub mod routes;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::directory::ActivityDirectory;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: Arc<ActivityDirectory>,
}

/// Build the router: the JSON API, the front-end under /static, and the
/// root redirect into it. 307 keeps the original redirect semantics.
pub(crate) fn app(directory: Arc<ActivityDirectory>, static_dir: &Path) -> Router {
    let state = AppState { directory };

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(routes::get_activities))
        .route("/activities/{name}/signup", post(routes::signup))
        .route("/activities/{name}/unregister", post(routes::unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

pub async fn serve(directory: ActivityDirectory, static_dir: &Path, addr: &str) -> Result<()> {
    let app = app(Arc::new(directory), static_dir);

    let listener = TcpListener::bind(addr).await?;
    info!("Signup server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
