use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct SourceDiscovery {
    extension: String,
    follow_links: bool,
}

impl SourceDiscovery {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into().trim_start_matches('.').to_string(),
            follow_links: false,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Find all source files with the configured extension under `root_path`
    pub fn find_source_files(&self, root_path: &Path) -> crate::Result<Vec<PathBuf>> {
        if !root_path.exists() {
            return Err(crate::RetrofitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("root directory not found: {}", root_path.display()),
            )));
        }

        let mut source_files = Vec::new();

        for entry in WalkDir::new(root_path).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && self.is_source_file(entry.path()) {
                source_files.push(entry.into_path());
            }
        }

        // Sort for consistent ordering
        source_files.sort();
        Ok(source_files)
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}

impl Default for SourceDiscovery {
    fn default() -> Self {
        Self::new("java")
    }
}
