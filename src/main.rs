use anyhow::{Context, Result};
use log::{error, info};

use rusty_pixels::{convert_images, ConvertConfig, ResizeShape};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConvertConfig::default();
    let shape = ResizeShape::default();
    info!(
        "Converting {} at {}x{}",
        config.manifest_path.display(),
        shape.width(),
        shape.height()
    );

    if let Err(e) = convert_images(&config, shape, false) {
        error!("Conversion failed: {e}");
        return Err(e).context("converting images");
    }
    Ok(())
}
