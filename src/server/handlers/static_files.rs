use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Router serving the generated tree, with `/` mapped to the configured home page
pub fn create_static_files_handler(destination: &Path, home_page: &str) -> Router {
    let serve_dir = ServeDir::new(destination).append_index_html_on_directories(true);

    Router::new()
        .route_service("/", ServeFile::new(destination.join(home_page)))
        .fallback_service(serve_dir)
}
