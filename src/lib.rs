//! Labeled image folder to flat grayscale pixel vectors.
//!
//! A CSV manifest lists image filenames and class labels. Every image is
//! converted to grayscale, resized to a fixed shape and flattened, then paired
//! with its label, either in memory or as a `data_images_<w>_<h>.txt` file.

pub mod config;
pub mod converter;
pub mod data;
pub mod error;

pub use config::{ConvertConfig, ResizeShape};
pub use converter::{build_dataset, convert_images, Conversion};
pub use data::model::{Dataset, FeatureVector, ManifestRow};
pub use error::ConvertError;
