use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

/// Writes an uploaded document under `dir` with a generated `<uuid>.pdf` name.
///
/// The client-supplied filename is never used on disk.
pub async fn save_upload(dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.pdf", Uuid::new_v4()));
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload to {}", path.display()))?;
    Ok(path)
}
