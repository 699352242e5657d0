// Module declarations
mod admin;
mod builder;
mod cli;
mod config;
mod document;
mod layout;
mod markdown;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
