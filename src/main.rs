use anyhow::Result;
use log::info;

use lostfound::config::Config;
use lostfound::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        if path.exists() {
            eprintln!("⚠️  Config file already exists: {}", path.display());
            return Ok(());
        }
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            eprintln!("\n💡 Fix the config file or run with --init-config to write a fresh one.");
            return Ok(());
        }
    };

    if let Some(path) = logger::init(&config.logging)? {
        println!("Logging to {}", path.display());
    }
    info!("Starting lostfound {}", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
