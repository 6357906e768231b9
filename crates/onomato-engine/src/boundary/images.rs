use std::fs;
use std::path::{Component, Path, PathBuf};

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid local asset name: {0}")]
    InvalidName(String),
    #[error("Invalid image url: {0}")]
    InvalidUrl(String),
    #[error("Fetching remote images is not supported: {0}")]
    RemoteUnsupported(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of image bytes for `img:` fragments.
///
/// Local references (`img:@name.png`) are served from an internal store by
/// filename, everything else is fetched by URL.
pub trait ImageStore {
    fn load_local(&self, name: &str) -> Result<Vec<u8>, AssetError>;

    fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, AssetError>;

    fn load(&self, url: &str, is_local: bool) -> Result<Vec<u8>, AssetError> {
        if is_local {
            self.load_local(url)
        } else {
            self.fetch_remote(url)
        }
    }
}

/// Serves local references from a directory on disk.
///
/// Remote fetching only understands `file://` URLs; any other scheme is
/// reported as [`AssetError::RemoteUnsupported`].
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(path: PathBuf) -> Result<Vec<u8>, AssetError> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }
        fs::read(&path).map_err(AssetError::Io)
    }
}

impl ImageStore for FsImageStore {
    fn load_local(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        Self::read(self.root.join(relative))
    }

    fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let parsed = Url::parse(url).map_err(|_| AssetError::InvalidUrl(url.to_string()))?;
        if parsed.scheme() != "file" {
            return Err(AssetError::RemoteUnsupported(url.to_string()));
        }
        let path = parsed
            .to_file_path()
            .map_err(|_| AssetError::InvalidUrl(url.to_string()))?;
        Self::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn store_with(name: &str, bytes: &[u8]) -> (TempDir, FsImageStore) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), bytes).unwrap();
        let store = FsImageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn loads_local_reference_by_name() {
        let (_dir, store) = store_with("don.png", b"\x89PNG");
        assert_eq!(store.load("don.png", true).unwrap(), b"\x89PNG");
    }

    #[test]
    fn missing_local_reference_is_not_found() {
        let (_dir, store) = store_with("don.png", b"x");
        assert!(matches!(
            store.load_local("other.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("../secret.png")]
    #[case("/etc/passwd")]
    #[case("a/../../b.png")]
    fn rejects_names_that_escape_the_store(#[case] name: &str) {
        let (_dir, store) = store_with("don.png", b"x");
        assert!(matches!(
            store.load_local(name),
            Err(AssetError::InvalidName(_))
        ));
    }

    #[test]
    fn fetches_file_urls() {
        let (dir, store) = store_with("don.png", b"bytes");
        let url = Url::from_file_path(dir.path().join("don.png")).unwrap();
        assert_eq!(store.load(url.as_str(), false).unwrap(), b"bytes");
    }

    #[test]
    fn other_schemes_are_unsupported() {
        let (_dir, store) = store_with("don.png", b"x");
        assert!(matches!(
            store.load("https://example.com/don.png", false),
            Err(AssetError::RemoteUnsupported(_))
        ));
        assert!(matches!(
            store.fetch_remote("not a url"),
            Err(AssetError::InvalidUrl(_))
        ));
    }
}
