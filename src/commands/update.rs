use crate::core::config::{UpdateConfig, BUNDLE_FILE_NAME};
use crate::core::download::Downloader;
use crate::error::Result;
use crate::utils::fs;
use std::io::Write;
use std::path::Path;

/// Replaces the bundle at its fixed location with the current CDN build.
pub fn run() -> Result<u64> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    update_with(&UpdateConfig::default(), &mut out)
}

/// Fetches `config.source_url` into `config.destination`, reporting to `out`.
/// Returns the number of bytes written.
pub fn update_with<W: Write>(config: &UpdateConfig, out: &mut W) -> Result<u64> {
    let destination = &config.destination;

    if let Some(parent) = destination.parent() {
        fs::ensure_dir_exists(parent)?;
    }

    let written = download_file(&config.source_url, destination, out)?;

    writeln!(out)?;
    writeln!(out, "✓ Successfully updated {BUNDLE_FILE_NAME}!")?;
    writeln!(out, "  Location: {}", destination.display())?;
    Ok(written)
}

fn download_file<W: Write>(url: &str, destination: &Path, out: &mut W) -> Result<u64> {
    writeln!(out, "Downloading {url}...")?;

    // Body is read in full before the destination is opened, so a failed
    // fetch never truncates the existing bundle.
    let content = Downloader::new().fetch(url)?;
    fs::write_file(destination, &content)?;

    writeln!(out, "✓ Downloaded {} bytes", content.len())?;
    Ok(content.len() as u64)
}
