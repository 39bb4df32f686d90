use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::model::Dataset;
use crate::config::ResizeShape;
use crate::error::{ConvertError, Result};

/// File name for a dataset of images resized to `shape`.
pub fn output_file_name(shape: ResizeShape) -> String {
    format!("data_images_{}_{}.txt", shape.width(), shape.height())
}

pub fn output_path(output_dir: &Path, shape: ResizeShape) -> PathBuf {
    output_dir.join(output_file_name(shape))
}

// ---------------------------------------------------------------------------
// Text writer
// ---------------------------------------------------------------------------

/// Format: one line per sample, every pixel followed by a single space, then
/// the label and `\n`:
///
/// ```text
/// 128 128 128 128 happy
/// 12 200 37 90 sad
/// ```
///
/// If writing fails after the file was created, it is removed again, so an
/// error never leaves a truncated dataset behind. A file that could not be
/// opened for writing is left as it was.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let write_err = |source: std::io::Error| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let result = write_lines(BufWriter::new(file), dataset);
    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("Could not remove partial output {}: {e}", path.display());
        }
    }
    result.map_err(write_err)
}

fn write_lines<W: Write>(mut out: W, dataset: &Dataset) -> std::io::Result<()> {
    let total = dataset.len();
    for (i, (pixels, label)) in dataset.iter().enumerate() {
        for value in pixels {
            write!(out, "{value} ")?;
        }
        writeln!(out, "{label}")?;
        log::debug!("{:.2}", (i + 1) as f64 / total as f64);
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Text reader
// ---------------------------------------------------------------------------

/// Parse a file produced by [`write_dataset`]. The last whitespace-separated
/// token of each line is the label; all earlier tokens are pixel values.
/// Blank lines are skipped.
///
/// Labels are single tokens in this format: a label that is empty or contains
/// whitespace cannot be recovered. Such lines show up as a row whose width
/// differs from the first row and are rejected.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dataset = Dataset::default();
    let mut width = None;
    for (line_no, line) in text.lines().enumerate() {
        let parse_err = |message: String| ConvertError::DatasetParse {
            path: path.to_path_buf(),
            line: line_no + 1,
            message,
        };

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(label) = tokens.pop() else {
            continue;
        };

        let pixels = tokens
            .iter()
            .map(|tok| {
                tok.parse::<u8>()
                    .map_err(|_| parse_err(format!("'{tok}' is not a pixel value")))
            })
            .collect::<Result<Vec<u8>>>()?;

        let expected = *width.get_or_insert(pixels.len());
        if pixels.len() != expected {
            return Err(parse_err(format!(
                "{} pixel values, expected {expected}",
                pixels.len()
            )));
        }

        dataset.push(pixels, label.to_string());
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut ds = Dataset::default();
        ds.push(vec![128, 128, 128, 128], "happy".into());
        ds.push(vec![0, 255, 7, 42], "sad".into());
        ds
    }

    #[test]
    fn file_name_encodes_shape() {
        let shape = ResizeShape::new(100, 48).unwrap();
        assert_eq!(output_file_name(shape), "data_images_100_48.txt");
        assert_eq!(
            output_path(Path::new("out"), shape),
            Path::new("out").join("data_images_100_48.txt")
        );
    }

    #[test]
    fn lines_have_trailing_space_before_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_dataset(&path, &sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "128 128 128 128 happy\n0 255 7 42 sad\n");
    }

    #[test]
    fn written_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_dataset(&path, &sample()).unwrap();

        assert_eq!(read_dataset(&path).unwrap(), sample());
    }

    #[test]
    fn empty_dataset_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_dataset(&path, &Dataset::default()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(read_dataset(&path).unwrap().is_empty());
    }

    #[test]
    fn unwritable_path_reports_file_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.txt");

        let err = write_dataset(&path, &sample()).unwrap_err();
        assert!(matches!(err, ConvertError::FileWrite { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn unopenable_existing_file_is_left_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_images_2_2.txt");
        fs::write(&path, "prior run\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        // Privileged users can write through read-only bits.
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = write_dataset(&path, &sample()).unwrap_err();
        assert!(matches!(err, ConvertError::FileWrite { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "prior run\n");
    }

    #[test]
    fn sink_errors_propagate() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(write_lines(Full, &sample()).is_err());
    }

    #[test]
    fn label_with_space_is_rejected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "1 2 3 happy\n1 2 3 very sad\n").unwrap();

        match read_dataset(&path).unwrap_err() {
            ConvertError::DatasetParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_label_is_rejected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "1 2 3 happy\n1 2 3 \n").unwrap();

        assert!(matches!(
            read_dataset(&path).unwrap_err(),
            ConvertError::DatasetParse { line: 2, .. }
        ));
    }

    #[test]
    fn out_of_range_pixel_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "1 2 3 happy\n1 256 3 sad\n").unwrap();

        match read_dataset(&path).unwrap_err() {
            ConvertError::DatasetParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
