use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageReader, Luma};

use super::model::{FeatureVector, ManifestRow};
use crate::config::ResizeShape;
use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// Manifest loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. `image_column` holds filenames
/// relative to the images directory, `label_column` the class label. Other
/// columns are ignored. Rows come back in file order.
pub fn load_manifest(
    path: &Path,
    image_column: &str,
    label_column: &str,
) -> Result<Vec<ManifestRow>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConvertError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let parse_err = |message: String| ConvertError::ManifestParse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| parse_err(format!("reading CSV headers: {e}")))?
        .clone();

    let image_idx = headers
        .iter()
        .position(|h| h == image_column)
        .ok_or_else(|| parse_err(format!("CSV missing '{image_column}' column")))?;
    let label_idx = headers
        .iter()
        .position(|h| h == label_column)
        .ok_or_else(|| parse_err(format!("CSV missing '{label_column}' column")))?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| parse_err(format!("CSV row {row_no}: {e}")))?;
        rows.push(ManifestRow {
            image_filename: record.get(image_idx).unwrap_or("").to_string(),
            label: record.get(label_idx).unwrap_or("").to_string(),
        });
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Image loader
// ---------------------------------------------------------------------------

/// Load an image, convert it to 8-bit grayscale, resize it to `shape` and
/// flatten it row-major.
///
/// The format is sniffed from the file content first, so a mislabeled
/// extension still decodes.
pub fn load_feature_vector(path: &Path, shape: ResizeShape) -> Result<FeatureVector> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConvertError::ImageNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::ImageDecode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(source),
            },
        })?;
    let img = reader.decode().map_err(|source| ConvertError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let gray = to_gray(&img);
    let resized = if gray.dimensions() == (shape.width(), shape.height()) {
        gray
    } else {
        imageops::resize(&gray, shape.width(), shape.height(), FilterType::CatmullRom)
    };

    let pixels = resized.into_raw();
    debug_assert_eq!(pixels.len(), shape.pixel_count());
    Ok(pixels)
}

/// 8-bit grayscale with ITU-R 601-2 luma, `L = R * 299/1000 + G * 587/1000 +
/// B * 114/1000`, in 16-bit fixed point. Alpha is dropped. Images that are
/// already grayscale only get their depth converted.
fn to_gray(img: &DynamicImage) -> GrayImage {
    if !img.color().has_color() {
        return img.to_luma8();
    }
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0.map(u32::from);
        Luma([((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8])
    })
}
