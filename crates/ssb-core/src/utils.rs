use log::error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Canonical shortened name of the application
pub const NAME: &str = "ssb";

/// Creates (if needed) the application directory under `dir`.
///
/// Failure is logged; the path is returned regardless so callers can report
/// where they tried to write.
#[must_use]
pub fn setup_ssb_dir(dir: &Path) -> PathBuf {
    let dir = dir.join(NAME);
    if let Err(e) = fs::create_dir_all(&dir) {
        error!("Can't create directory {}: {e}", dir.display());
    }
    dir
}

/// Opens `url` with the platform's default handler.
pub fn open_url(url: &str) {
    #[cfg(target_os = "windows")]
    let output = Command::new("explorer").arg(url).output();

    #[cfg(target_os = "macos")]
    let output = Command::new("open").arg(url).output();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let output = Command::new("xdg-open").arg(url).output();

    match output {
        Ok(o) => {
            if !o.status.success() {
                let stderr = String::from_utf8_lossy(&o.stderr);
                error!("Can't open the following URL: {}", stderr.trim_end());
            }
        }
        Err(e) => error!("Failed to run command to open the URL: {e}"),
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_app_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = setup_ssb_dir(tmp.path());
        assert!(dir.is_dir());
        assert!(dir.ends_with(NAME));
    }
}
