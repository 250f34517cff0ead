use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

/// A request template could not be read from disk
#[derive(Debug, thiserror::Error)]
#[error("unable to load payload file {path:?}")]
pub struct PayloadUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read a request template verbatim
///
/// The content is not parsed; a malformed template is only noticed when the
/// GitHub API rejects it.
pub async fn load_payload(path: &Path) -> Result<Bytes, PayloadUnavailable> {
    tokio::fs::read(path)
        .await
        .map(Bytes::from)
        .map_err(|source| PayloadUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_payload_returns_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        // Not valid JSON on purpose
        std::fs::write(&path, b"{\"title\": ").unwrap();

        let body = load_payload(&path).await.unwrap();
        assert_eq!(&body[..], b"{\"title\": ");
    }

    #[tokio::test]
    async fn test_load_payload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_payload(&path).await.unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }
}
