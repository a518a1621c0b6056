//! Document I/O operations for imposition

use crate::render::PdfSource;
use crate::types::*;
use std::path::Path;

/// Load a source PDF
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<PdfSource> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let source = tokio::task::spawn_blocking(move || PdfSource::open(&bytes)).await??;
    log::debug!("Loaded {}", path.display());
    Ok(source)
}

/// Save an imposed PDF
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
