use std::path::{Path, PathBuf};

/// Always tracks the `latest` tag; nothing is pinned.
pub const CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/@portofcontext/mcp-client@latest/dist/index.mjs";

/// Bundle location relative to the repository root.
pub const BUNDLE_RELATIVE_PATH: [&str; 4] = ["crates", "sdk_runner", "js", "mcp-client.min.mjs"];

pub const BUNDLE_FILE_NAME: &str = "mcp-client.min.mjs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    pub source_url: String,
    pub destination: PathBuf,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        UpdateConfig {
            source_url: CDN_URL.to_string(),
            destination: default_destination(),
        }
    }
}

impl UpdateConfig {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(source_url: S, destination: P) -> Self {
        UpdateConfig {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }
}

/// Directory this tool lives in, fixed at compile time so the result
/// does not depend on where the binary is invoked from.
pub fn tool_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

pub fn repo_root(tool_dir: &Path) -> PathBuf {
    match tool_dir.parent() {
        Some(parent) => parent.to_path_buf(),
        None => tool_dir.join(".."),
    }
}

pub fn destination_under(repo_root: &Path) -> PathBuf {
    BUNDLE_RELATIVE_PATH
        .iter()
        .fold(repo_root.to_path_buf(), |path, part| path.join(part))
}

pub fn default_destination() -> PathBuf {
    destination_under(&repo_root(tool_dir()))
}
