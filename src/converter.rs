use std::path::PathBuf;

use log::{debug, info};

use crate::config::{ConvertConfig, ResizeShape};
use crate::data::loader::{load_feature_vector, load_manifest};
use crate::data::model::Dataset;
use crate::data::writer::{output_path, write_dataset};
use crate::error::Result;

/// Outcome of [`convert_images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// `return_early` was set; nothing was written.
    InMemory(Dataset),
    /// The dataset was written to this file.
    Written(PathBuf),
}

/// Load every image listed in the manifest, in order, as a grayscale
/// feature vector of `shape`. The first failure aborts the whole run.
pub fn build_dataset(config: &ConvertConfig, shape: ResizeShape) -> Result<Dataset> {
    let rows = load_manifest(
        &config.manifest_path,
        &config.image_column,
        &config.label_column,
    )?;
    info!(
        "Done reading {} ({} rows)",
        config.manifest_path.display(),
        rows.len()
    );

    let total = rows.len();
    let mut dataset = Dataset::with_capacity(total);
    for (i, row) in rows.into_iter().enumerate() {
        let path = config.images_dir.join(&row.image_filename);
        let features = load_feature_vector(&path, shape)?;
        dataset.push(features, row.label);
        debug!("{:.2}", (i + 1) as f64 / total as f64);
    }

    info!("Done turning {} images into vectors", dataset.len());
    Ok(dataset)
}

/// Convert the manifest's images at `shape`.
///
/// With `return_early` the dataset is handed back in memory. Otherwise it is
/// written to `data_images_<w>_<h>.txt` in the output directory, only after
/// every image has been processed.
pub fn convert_images(
    config: &ConvertConfig,
    shape: ResizeShape,
    return_early: bool,
) -> Result<Conversion> {
    let dataset = build_dataset(config, shape)?;
    if return_early {
        return Ok(Conversion::InMemory(dataset));
    }

    let path = output_path(&config.output_dir, shape);
    write_dataset(&path, &dataset)?;
    info!("Done converting images to txt at: {}", path.display());
    Ok(Conversion::Written(path))
}
