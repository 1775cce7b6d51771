//! Upload/output storage area
//!
//! Two shared directories back the whole service: one for inbound uploads,
//! one for produced artifacts. Both are created at startup. Uploaded files
//! are kept under a sanitized version of the client-supplied filename and are
//! never cleaned up automatically.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;

/// Fallback name when sanitization leaves nothing usable.
const FALLBACK_NAME: &str = "upload";

/// Create the upload and output directories if they do not exist yet.
pub fn ensure_dirs(storage: &StorageConfig) -> io::Result<()> {
    std::fs::create_dir_all(&storage.upload_dir)?;
    std::fs::create_dir_all(&storage.output_dir)?;
    Ok(())
}

/// Strip path components and unsafe characters from a client-supplied
/// filename so it is safe to join onto a storage directory.
///
/// Only the final path component survives; separators, shell-unsafe
/// punctuation, control characters, and whitespace become underscores, and
/// leading/trailing dots and underscores are trimmed so the result can never
/// escape the directory or hide as a dotfile.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let cleaned: String = base
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c == '_' || c == '.');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Persist an uploaded file under its (already sanitized) filename.
///
/// Returns the full path the bytes were written to.
pub async fn save_upload(dir: &Path, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(filename);
    tokio::fs::write(&path, data).await?;
    tracing::debug!(file = %path.display(), bytes = data.len(), "stored upload");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("scan_2024.jpg"), "scan_2024.jpg");
    }

    #[test]
    fn path_components_are_stripped() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/evil.pdf"), "evil.pdf");
        assert_eq!(sanitize_filename("C:\\Users\\x\\doc.pdf"), "doc.pdf");
    }

    #[test]
    fn unsafe_characters_become_underscores() {
        assert_eq!(sanitize_filename("a b?.pdf"), "a_b_.pdf");
        assert_eq!(sanitize_filename("we<ird|name>.pdf"), "we_ird_name_.pdf");
    }

    #[test]
    fn hidden_and_empty_names_get_the_fallback() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
        assert_eq!(sanitize_filename(".bashrc"), "bashrc");
    }

    #[test]
    fn directories_are_created() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            upload_dir: tmp.path().join("in"),
            output_dir: tmp.path().join("out"),
        };
        ensure_dirs(&storage).unwrap();
        assert!(storage.upload_dir.is_dir());
        assert!(storage.output_dir.is_dir());
        // idempotent
        ensure_dirs(&storage).unwrap();
    }
}
