use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;

/// One row of `legend.csv`, same header layout as the real dataset.
#[derive(Serialize)]
struct LegendRow {
    user_id: u32,
    image: String,
    emotion: &'static str,
}

const EMOTIONS: [&str; 4] = ["happiness", "sadness", "neutral", "surprise"];
const SIDE: u32 = 350;

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed.max(1))
    }

    fn next_u8(&mut self) -> u8 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        (self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8
    }
}

fn main() -> Result<()> {
    let data_dir = Path::new("data");
    let images_dir = Path::new("images");
    fs::create_dir_all(data_dir).context("creating data/")?;
    fs::create_dir_all(images_dir).context("creating images/")?;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(data_dir.join("legend.csv"))
        .context("creating legend.csv")?;

    let mut count = 0;
    for (user_id, emotion) in (1..=3).flat_map(|u| EMOTIONS.iter().map(move |e| (u, *e))) {
        let name = format!("user{user_id:02}_{emotion}.png");
        let path = images_dir.join(&name);

        // Alternate between flat gray frames and noisy color frames.
        if count % 2 == 0 {
            GrayImage::from_pixel(SIDE, SIDE, Luma([rng.next_u8()]))
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        } else {
            let base = [rng.next_u8(), rng.next_u8(), rng.next_u8()];
            RgbImage::from_fn(SIDE, SIDE, |x, y| {
                let shade = ((x + y) * 255 / (2 * SIDE)) as u8;
                Rgb(base.map(|c| c / 2 + shade / 2))
            })
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        }

        writer
            .serialize(LegendRow {
                user_id,
                image: name,
                emotion,
            })
            .context("writing legend row")?;
        count += 1;
    }
    writer.flush().context("flushing legend.csv")?;

    println!(
        "Wrote {count} images ({SIDE}x{SIDE}) to {} and data/legend.csv",
        images_dir.display()
    );
    Ok(())
}
