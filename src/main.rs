pub mod config;
pub mod errors;
pub mod http;
pub mod ingest;
pub mod os;
pub mod page;
pub mod validate;

use ingest::{IngestionGate, source::CsvFileSource};
use std::sync::Arc;

use crate::config::DATA_FILE_PATH;

#[cfg(target_os = "linux")]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn setup_logging() {
    unsafe {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    log::info!("Serving customers from {}", DATA_FILE_PATH.display());

    // Nothing is read until the first load request.
    let gate = Arc::new(IngestionGate::new(Box::new(CsvFileSource::new(
        DATA_FILE_PATH.clone(),
    ))));

    http::run_server(gate).await?;

    log::info!("HTTP server stopped");

    Ok(())
}
