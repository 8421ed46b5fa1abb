use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;

use notedrift::app::{App, SETTINGS_FILE, SettingsStore, notedrift_home};
use notedrift::infra::settings_file::JsonSettingsStore;
use notedrift::infra::vault_scan;

#[derive(Parser)]
#[command(name = "notedrift", version, about = "Terminal vault browser")]
struct Cli {
    /// Root directory of the note vault.
    #[arg(default_value = ".")]
    vault: PathBuf,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let home = notedrift_home();
    init_tracing(&home)?;

    let vault_dir = cli.vault.canonicalize()?;
    let vault_root = vault_scan::scan_vault(&vault_dir).map_err(io::Error::other)?;

    let settings_store = JsonSettingsStore::new(home.join(SETTINGS_FILE));
    let settings = match settings_store.load() {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(%error, "failed to load settings, using defaults");

            notedrift::app::Settings::default()
        }
    };

    let mut app = App::new(vault_dir, vault_root, settings, Box::new(settings_store));

    notedrift::runtime::run(&mut app).await
}

/// Writes debug-level logs to `notedrift.log` in the notedrift home.
///
/// Logging to stderr would corrupt the alternate-screen TUI.
fn init_tracing(home: &Path) -> io::Result<()> {
    std::fs::create_dir_all(home)?;
    let log_file = File::create(home.join("notedrift.log"))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .init();

    Ok(())
}
