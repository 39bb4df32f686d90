// ---------------------------------------------------------------------------
// ManifestRow – one record of the CSV manifest
// ---------------------------------------------------------------------------

/// A single manifest record: which image, and what class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    /// Filename relative to the images directory.
    pub image_filename: String,
    /// Class label, kept verbatim.
    pub label: String,
}

/// Flattened grayscale pixels of one resized image, row-major.
pub type FeatureVector = Vec<u8>;

// ---------------------------------------------------------------------------
// Dataset – feature vectors paired with labels
// ---------------------------------------------------------------------------

/// Parallel feature and label sequences. Index `i` in both refers to the
/// same manifest row; the two always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    features: Vec<FeatureVector>,
    labels: Vec<String>,
}

impl Dataset {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            features: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample.
    pub fn push(&mut self, features: FeatureVector, label: String) {
        self.features.push(features);
        self.labels.push(label);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Samples in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &str)> {
        self.features
            .iter()
            .zip(&self.labels)
            .map(|(f, l)| (f.as_slice(), l.as_str()))
    }

    pub fn into_parts(self) -> (Vec<FeatureVector>, Vec<String>) {
        (self.features, self.labels)
    }
}
