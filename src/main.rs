use std::error::Error;
use std::sync::Arc;

use sentence_clipboard::{http, logging, FileSnapshotStore, SentenceService, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = ServerConfig::default();
    let service = Arc::new(SentenceService::load(FileSnapshotStore::new(
        &config.data_file,
    )));
    service.seed_if_empty()?;

    tracing::info!(
        url = %format!("http://localhost:{}", config.addr.port()),
        data_file = %config.data_file.display(),
        "starting sentence clipboard"
    );

    if let Err(e) = http::serve(service, &config).await {
        tracing::error!(addr = %config.addr, error = %e, "server failed");
        return Err(e.into());
    }
    Ok(())
}
