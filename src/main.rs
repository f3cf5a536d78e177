use std::io::Read;

use rustyheaders::config::EditorConfig;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_CONFIG_PATH: &str = "rustyheaders.toml";

fn main() -> std::io::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match EditorConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(cause = %e, "fall back to default config");
            EditorConfig::default()
        }
    };

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    let (store, advisory) = config.reconcile(raw.trim_end_matches('\n'));
    if let Some(advisory) = advisory {
        info!(%advisory, entries = store.entries().len(), "headers reconciled");
    }

    println!("{}", store.raw());
    Ok(())
}
