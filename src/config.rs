use std::path::PathBuf;

use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_MANIFEST_PATH: &str = "./data/legend.csv";
pub const DEFAULT_IMAGES_DIR: &str = "./images";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_IMAGE_COLUMN: &str = "image";
pub const DEFAULT_LABEL_COLUMN: &str = "emotion";
pub const DEFAULT_RESIZE: (u32, u32) = (100, 100);

// ---------------------------------------------------------------------------
// ConvertConfig – where to read from and write to
// ---------------------------------------------------------------------------

/// Locations and column names used by a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// CSV manifest mapping image filenames to labels.
    pub manifest_path: PathBuf,
    /// Directory the manifest's filenames are relative to.
    pub images_dir: PathBuf,
    /// Directory the `data_images_<w>_<h>.txt` file is written into.
    pub output_dir: PathBuf,
    /// Header of the image filename column.
    pub image_column: String,
    /// Header of the label column.
    pub label_column: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_column: DEFAULT_IMAGE_COLUMN.to_string(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ResizeShape – target width × height
// ---------------------------------------------------------------------------

/// Target image dimensions; both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeShape {
    width: u32,
    height: u32,
}

impl ResizeShape {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidResizeShape { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in a resized image, i.e. the feature vector length.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for ResizeShape {
    fn default() -> Self {
        Self {
            width: DEFAULT_RESIZE.0,
            height: DEFAULT_RESIZE.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            ResizeShape::new(0, 10),
            Err(ConvertError::InvalidResizeShape { width: 0, height: 10 })
        ));
        assert!(ResizeShape::new(10, 0).is_err());
        assert!(ResizeShape::new(0, 0).is_err());
    }

    #[test]
    fn pixel_count_is_width_times_height() {
        let shape = ResizeShape::new(48, 32).unwrap();
        assert_eq!(shape.pixel_count(), 48 * 32);
        assert_eq!(ResizeShape::default().pixel_count(), 10_000);
    }

    #[test]
    fn default_config_uses_legend_layout() {
        let config = ConvertConfig::default();
        assert_eq!(config.manifest_path, PathBuf::from("./data/legend.csv"));
        assert_eq!(config.images_dir, PathBuf::from("./images"));
        assert_eq!(config.image_column, "image");
        assert_eq!(config.label_column, "emotion");
    }
}
