use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Decorative logo shown above the form. Missing is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoAsset {
    Loaded { uri: String, bytes: Arc<[u8]> },
    Missing { path: PathBuf, reason: String },
}

impl LogoAsset {
    /// Reads the logo once at startup.
    pub fn load(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => {
                info!("Loaded logo from {:?} ({} bytes)", path, bytes.len());
                Self::Loaded {
                    // egui's image loaders pick the decoder from the extension.
                    uri: format!("bytes://{}", path.display()),
                    bytes: Arc::from(bytes),
                }
            }
            Err(e) => {
                let reason = if e.kind() == ErrorKind::NotFound {
                    "not found".to_string()
                } else {
                    e.to_string()
                };
                warn!("Logo unavailable at {:?}: {}. Continuing without it.", path, reason);
                Self::Missing {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        }
    }

    /// User-facing warning, if the logo could not be loaded.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Loaded { .. } => None,
            Self::Missing { path, .. } => Some(format!(
                "Logo not found. Please add '{}' to your folder.",
                path.display()
            )),
        }
    }
}
