use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::signal;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::admin::SiteAdmin;
use crate::builder::watch_document;
use crate::server::config::ServerConfig;
use crate::server::handlers::create_static_files_handler;
use crate::utils::error::BoxResult;

/// Regenerate the site, then serve the output tree until Ctrl+C.
///
/// With `watch` set, the persisted document is watched on a blocking task
/// and every change triggers a regeneration. The watcher is stopped and
/// joined before this returns.
pub async fn serve(admin: Arc<SiteAdmin>, server_config: &ServerConfig) -> BoxResult<()> {
    let config = admin.generator().config().clone();

    info!("Building site before serving...");
    match admin.regenerate() {
        Ok(_) => info!("Site built successfully"),
        Err(e) => {
            error!("Failed to build site: {}", e);
            warn!("Serving the existing output anyway");
        }
    }

    if !config.destination.exists() {
        error!("Destination directory {} does not exist", config.destination.display());
        return Err("Destination directory not found".into());
    }

    let watcher = if server_config.watch {
        Some(DocumentWatcher::spawn(Arc::clone(&admin), config.data_file.clone()))
    } else {
        None
    };

    let app = create_static_files_handler(&config.destination, &config.home_page)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = server_config.address_string().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Starting server at {}", server_config.url());
    info!("Serving files from {}", config.destination.display());
    print_server_banner(server_config);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(watcher) = watcher {
        watcher.shutdown().await;
    }

    result?;
    info!("Server stopped");
    Ok(())
}

/// Document watcher running on the blocking pool
struct DocumentWatcher {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl DocumentWatcher {
    fn spawn(admin: Arc<SiteAdmin>, data_file: PathBuf) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_document(&data_file, &flag, || admin.regenerate().map(|_| ())) {
                error!("Document watcher stopped: {}", e);
            }
        });
        DocumentWatcher { stop, handle }
    }

    async fn shutdown(self) {
        debug!("Stopping document watcher");
        self.stop.store(true, Ordering::SeqCst);
        if let Err(e) = self.handle.await {
            error!("Document watcher task failed: {}", e);
        }
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down server (received Ctrl+C)..."),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" Folio preview server");
    println!(" - URL: {}", server_config.url());
    println!(" - Watching document: {}", if server_config.watch { "Yes" } else { "No" });
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::builder::SiteGenerator;
    use crate::config::Config;
    use crate::document::JsonFileStore;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_watcher_shutdown_joins_task() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_file: dir.path().join("site_data.json"),
            destination: dir.path().join("public"),
            ..Config::default()
        };
        let store = JsonFileStore::new(&config.data_file);
        store.initialize().unwrap();
        let generator = SiteGenerator::new(&config).unwrap();
        let admin = Arc::new(SiteAdmin::new(Box::new(store), generator, config.slug_collisions));

        let watcher = DocumentWatcher::spawn(admin, config.data_file.clone());
        tokio::time::sleep(Duration::from_millis(300)).await;

        tokio::time::timeout(Duration::from_secs(3), watcher.shutdown())
            .await
            .expect("watcher did not stop");
    }
}
