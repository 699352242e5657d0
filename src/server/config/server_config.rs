/// Preview server options
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Regenerate whenever the persisted document changes on disk
    pub watch: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
            watch: false,
        }
    }
}

impl ServerConfig {
    /// Socket address string, e.g. `127.0.0.1:4000`
    pub fn address_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address_string())
    }
}
