use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConvertError – every way a conversion run can fail
// ---------------------------------------------------------------------------

/// Failures of a conversion run. None of them are recovered locally: they
/// propagate to the caller and the run produces no output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Cannot open manifest {}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("Image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Cannot decode image {}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot write output file {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resize shape must be positive, got {width}x{height}")]
    InvalidResizeShape { width: u32, height: u32 },

    #[error("Cannot read dataset file {}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset file {} at line {line}: {message}", path.display())]
    DatasetParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
