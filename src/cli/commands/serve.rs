use std::sync::Arc;

use crate::cli::commands::open_admin;
use crate::config::Config;
use crate::server::{self, ServerConfig};
use crate::utils::error::BoxResult;

/// Handle the serve command
pub async fn handle_serve_command(config: &Config, host: &str, port: u16, watch: bool) -> BoxResult<()> {
    let admin = Arc::new(open_admin(config)?);
    let server_config = ServerConfig {
        host: host.to_string(),
        port,
        watch,
    };

    server::serve(admin, &server_config).await
}
