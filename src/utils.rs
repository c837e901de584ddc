use image::ImageError;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ImageReadError;

/// Read the pixel dimensions of an image file by probing its header.
///
/// A missing file is reported separately from an undecodable one so the
/// caller can name the right cause before skipping the image.
pub fn read_image_dimensions(path: &Path) -> Result<(u32, u32), ImageReadError> {
    match image::image_dimensions(path) {
        Ok(dimensions) => Ok(dimensions),
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            Err(ImageReadError::NotFound)
        }
        Err(e) => Err(ImageReadError::Decode(e)),
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
