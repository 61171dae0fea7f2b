use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use smokestack::error::Result;
use smokestack::server::{self, AppState};
use smokestack::settings::Settings;
use smokestack::store::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    info!(dataset = %settings.dataset, listen = %settings.listen, "starting smokestack");

    // The one-time load; everything downstream shares the store read-only.
    let store = Arc::new(RecordStore::load_or_empty(&settings.dataset));
    let state = Arc::new(AppState::new(store));
    server::serve(state, &settings.listen).await
}
