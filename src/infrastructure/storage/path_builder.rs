use std::path::{Path, PathBuf};

use crate::application::ports::StorageError;

/// Utility for turning bucket keys into filesystem paths and public URLs
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding stored objects: {root}/objects
    pub fn objects_root(&self) -> PathBuf {
        self.root.join("objects")
    }

    /// Directory holding in-flight uploads: {root}/temp
    pub fn temp_root(&self) -> PathBuf {
        self.root.join("temp")
    }

    /// Generate temp upload path: {root}/temp/{uuid}
    pub fn temp_path(&self, id: uuid::Uuid) -> PathBuf {
        self.temp_root().join(id.to_string())
    }

    /// Final path of a key: {root}/objects/{key}
    pub fn final_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let key = validate_key(key)?;
        Ok(self.objects_root().join(Path::new(key)))
    }
}

/// Reject keys that could escape the bucket: empty, absolute, `.`/`..`
/// segments, empty segments, backslashes, and NUL bytes.
pub fn validate_key(key: &str) -> Result<&str, StorageError> {
    let invalid = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.contains('\0')
        || key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if invalid {
        return Err(StorageError::InvalidPath(key.to_string()));
    }
    Ok(key)
}

/// Join a base URL and a key with exactly one slash
pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_path_under_objects_root() {
        let builder = PathBuilder::new(PathBuf::from("/data/bucket"));
        let path = builder.final_path("photos/1-a.jpg").unwrap();
        assert_eq!(path, PathBuf::from("/data/bucket/objects/photos/1-a.jpg"));
    }

    #[test]
    fn test_rejects_escaping_keys() {
        for key in [
            "",
            "/etc/passwd",
            "../secret",
            "photos/../../secret",
            "photos//a.jpg",
            "photos/./a.jpg",
            "photos\\a.jpg",
            "photos/a\0.jpg",
        ] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidPath(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_accepts_names_with_dots_and_dashes() {
        assert!(validate_key("photos/1700000000000-my.house-front.jpg").is_ok());
        assert!(validate_key("a..b").is_ok());
    }

    #[test]
    fn test_public_url_single_slash() {
        assert_eq!(
            public_url("https://storage.googleapis.com/bucket/", "photos/a.jpg"),
            "https://storage.googleapis.com/bucket/photos/a.jpg"
        );
        assert_eq!(
            public_url("http://localhost:8080/files", "photos/a.jpg"),
            "http://localhost:8080/files/photos/a.jpg"
        );
    }
}
