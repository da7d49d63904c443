//! Avatar selection and preview lifecycle
//!
//! At most one preview is alive at a time. Selecting a new image revokes the
//! previous preview; a failed selection leaves the current one untouched.

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::{Error, Result};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A live avatar preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    pub id: Uuid,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl PreviewHandle {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct AvatarPreview {
    current: Option<PreviewHandle>,
}

impl AvatarPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PreviewHandle> {
        self.current.as_ref()
    }

    /// Select an image file as the new avatar
    pub fn select(&mut self, path: impl AsRef<Path>) -> Result<&PreviewHandle> {
        let path = path.as_ref();
        if !has_image_extension(path) {
            return Err(Error::NotAnImage(path.to_path_buf()));
        }
        let (width, height) = image::image_dimensions(path)?;

        let handle = PreviewHandle {
            id: Uuid::new_v4(),
            path: path.to_path_buf(),
            width,
            height,
        };
        debug!(id = %handle.id, width, height, "created avatar preview");

        if let Some(previous) = self.current.take() {
            revoke(previous);
        }
        Ok(self.current.insert(handle))
    }

    /// Drop the current preview, returning to the placeholder
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            revoke(previous);
        }
    }
}

fn revoke(handle: PreviewHandle) {
    debug!(id = %handle.id, "revoked avatar preview");
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("expatise-avatar-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_select_image() {
        let dir = temp_dir();
        let path = write_png(&dir, "me.png", 4, 3);

        let mut avatar = AvatarPreview::new();
        let handle = avatar.select(&path).unwrap();
        assert_eq!((handle.width, handle.height), (4, 3));
        assert_eq!(handle.file_name(), "me.png");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let dir = temp_dir();
        let first = write_png(&dir, "a.png", 2, 2);
        let second = write_png(&dir, "b.PNG", 5, 5);

        let mut avatar = AvatarPreview::new();
        let first_id = avatar.select(&first).unwrap().id;
        let second_id = avatar.select(&second).unwrap().id;

        assert_ne!(first_id, second_id);
        assert_eq!(avatar.current().unwrap().path, second);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_rejects_non_image_and_keeps_previous() {
        let dir = temp_dir();
        let good = write_png(&dir, "ok.png", 1, 1);
        let text = dir.join("notes.txt");
        std::fs::write(&text, "hello").unwrap();
        let fake = dir.join("fake.png");
        std::fs::write(&fake, "not really a png").unwrap();

        let mut avatar = AvatarPreview::new();
        avatar.select(&good).unwrap();

        assert!(matches!(avatar.select(&text), Err(Error::NotAnImage(_))));
        assert!(matches!(avatar.select(&fake), Err(Error::Image(_))));
        assert_eq!(avatar.current().unwrap().path, good);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_clear() {
        let dir = temp_dir();
        let path = write_png(&dir, "me.jpg.png", 1, 1);

        let mut avatar = AvatarPreview::new();
        avatar.select(&path).unwrap();
        avatar.clear();
        assert!(avatar.current().is_none());

        std::fs::remove_dir_all(&dir).ok();
    }
}
