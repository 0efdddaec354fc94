use crate::errors::CaptureError;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;

/// Makes `path` absolute against the current directory without touching symlinks.
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

pub async fn read_file_content(file_path: &Path) -> Result<String, CaptureError> {
    async_fs::read_to_string(file_path)
        .await
        .map_err(|err| CaptureError::FileRead {
            path: file_path.to_path_buf(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        let path = PathBuf::from("/srv/project");
        assert_eq!(absolute_path(&path).unwrap(), path);
    }

    #[test]
    fn relative_paths_join_current_dir() {
        let resolved = absolute_path(Path::new("src")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("src"));
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.py");
        tokio::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).await.unwrap();

        let err = read_file_content(&path).await.unwrap_err();
        assert!(matches!(err, CaptureError::FileRead { .. }));
    }
}
