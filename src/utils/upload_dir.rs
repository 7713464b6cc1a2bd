use std::path::{Path, PathBuf};

use tokio::fs; // Async filesystem
use uuid::Uuid;

use crate::{error::AppResult, models::product::ImageUpload, utils::filename::secure_filename};

/// The directory uploaded images are written to and served from.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Creates the directory if it is missing. Run once, before serving requests.
    pub async fn init(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes the image under its sanitized name and returns that name.
    /// An existing file with the same name is overwritten.
    pub async fn save_image(&self, image: Option<ImageUpload>) -> AppResult<Option<String>> {
        // 1. No file, nothing to do
        let Some(image) = image else {
            return Ok(None);
        };

        // 2. Strip the client's name down to something safe
        let mut filename = secure_filename(&image.file_name);
        if filename.is_empty() {
            filename = format!("upload-{}", Uuid::new_v4().simple());
        }

        // 3. Save to disk
        let filepath = self.root.join(&filename);
        fs::write(&filepath, &image.data).await?;

        tracing::info!("Saved image {} ({} bytes)", filepath.display(), image.data.len());
        Ok(Some(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::body::Bytes;

    fn image(name: &str, data: &'static [u8]) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("static").join("uploads");

        let dir = UploadDir::init(&root).await.unwrap();
        assert!(dir.path().is_dir());

        // Second start is a no-op
        UploadDir::init(&root).await.unwrap();
    }

    #[tokio::test]
    async fn no_image_has_no_side_effect() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::init(tmp.path()).await.unwrap();

        assert_eq!(dir.save_image(None).await.unwrap(), None);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn image_is_written_under_sanitized_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::init(tmp.path()).await.unwrap();

        let saved = dir
            .save_image(Some(image("../secret/red apple.png", b"\x89PNG")))
            .await
            .unwrap();

        assert_eq!(saved.as_deref(), Some("secret_red_apple.png"));
        assert_eq!(std::fs::read(tmp.path().join("secret_red_apple.png")).unwrap(), b"\x89PNG");
        assert!(!tmp.path().parent().unwrap().join("secret").exists());
    }

    #[tokio::test]
    async fn same_name_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::init(tmp.path()).await.unwrap();

        dir.save_image(Some(image("a.jpg", b"first"))).await.unwrap();
        dir.save_image(Some(image("a.jpg", b"second"))).await.unwrap();

        assert_eq!(std::fs::read(tmp.path().join("a.jpg")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn unusable_name_gets_a_generated_one() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::init(tmp.path()).await.unwrap();

        let saved = dir.save_image(Some(image("圖片", b"data"))).await.unwrap().unwrap();

        assert!(saved.starts_with("upload-"));
        assert!(tmp.path().join(&saved).is_file());
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = UploadDir::init(tmp.path().join("gone")).await.unwrap();
        std::fs::remove_dir(dir.path()).unwrap();

        let err = dir.save_image(Some(image("a.jpg", b"x"))).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "got {err:?}");
    }
}
