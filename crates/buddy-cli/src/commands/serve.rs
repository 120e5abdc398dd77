//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::open_snapshot;

pub async fn cmd_serve(data_path: &Path, host: &str, port: u16) -> Result<()> {
    println!("🦊 Starting Finance Buddy web server...");
    println!("   Data: {}", data_path.display());
    println!("   Listening: http://{}:{}", host, port);

    // Parse allowed CORS origins from environment (comma-separated)
    let origins = std::env::var("BUDDY_ALLOWED_ORIGINS").unwrap_or_default();
    let config = buddy_server::ServerConfig::with_origins(&origins);

    if config.allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin (set BUDDY_ALLOWED_ORIGINS to restrict)");
    } else {
        println!("   🌐 CORS: {}", config.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let snapshot = open_snapshot(data_path);
    buddy_server::serve(snapshot, host, port, config).await?;

    Ok(())
}
