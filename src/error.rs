use std::path::PathBuf;

/// Fatal conditions that abort a conversion run before the output file is
/// produced.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("CSV file not found: {}", .path.display())]
    CsvNotFound { path: PathBuf },

    #[error("failed to parse CSV {}: {}", .path.display(), .source)]
    CsvMalformed { path: PathBuf, source: csv::Error },

    #[error("CSV file contains no rows: {}", .path.display())]
    CsvEmpty { path: PathBuf },

    #[error("CSV {} is missing required column(s): {}", .path.display(), .missing.join(", "))]
    CsvSchema { path: PathBuf, missing: Vec<String> },

    #[error("failed to write COCO JSON {}: {}", .path.display(), .source)]
    WriteFailed { path: PathBuf, source: std::io::Error },
}

impl ConvertError {
    /// Process exit code for this condition. Each fatal condition gets its
    /// own code so callers can tell them apart without parsing log output.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::CsvNotFound { .. } => 2,
            ConvertError::CsvMalformed { .. } => 3,
            ConvertError::CsvEmpty { .. } => 4,
            ConvertError::CsvSchema { .. } => 5,
            ConvertError::WriteFailed { .. } => 6,
        }
    }
}

/// Why a referenced image could not be resolved. Recoverable: the caller
/// skips the image and its rows and continues with the rest of the run.
#[derive(Debug, thiserror::Error)]
pub enum ImageReadError {
    #[error("image file not found")]
    NotFound,

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
}
