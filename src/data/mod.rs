/// Data layer: core types, loading, and text output.
///
/// Architecture:
/// ```text
///  legend.csv + images/
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  manifest rows, image → grayscale → resize → Vec<u8>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  features + labels, manifest order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  data_images_<w>_<h>.txt (and back)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
