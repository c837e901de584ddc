use serde::Deserialize;

use log::{info, warn};

// Columns the input table must provide. Checked once against the CSV header
// before any row is converted; extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "image_name",
    "category_label",
    "h_min",
    "w_min",
    "h_max",
    "w_max",
];

// One bounding-box record from the input table. The first coordinate pair is
// the box origin, the second the far corner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Row {
    pub image_name: String,
    pub category_label: String,
    pub h_min: f64,
    pub w_min: f64,
    pub h_max: f64,
    pub w_max: f64,
}

// Struct to hold conversion statistics
#[derive(Debug, Default, Clone)]
pub struct ConversionStats {
    pub rows_total: usize,
    pub distinct_images: usize,
    pub images_converted: usize,
    pub images_skipped: usize,
    pub annotations_written: usize,
    pub categories_registered: usize,
}

impl ConversionStats {
    /// Rows dropped because their image was skipped.
    pub fn rows_skipped(&self) -> usize {
        self.rows_total - self.annotations_written
    }

    /// Whether every referenced image made it into the output.
    pub fn is_complete(&self) -> bool {
        self.images_skipped == 0
    }

    pub fn print_summary(&self) {
        info!("=== Conversion Summary ===");
        info!("Input rows: {}", self.rows_total);
        info!("Distinct images referenced: {}", self.distinct_images);
        info!("Images converted: {}", self.images_converted);
        info!("Annotations written: {}", self.annotations_written);
        info!("Categories registered: {}", self.categories_registered);

        if self.images_skipped > 0 {
            warn!(
                "Skipped {} image(s) and their {} row(s); the output is a partial dataset",
                self.images_skipped,
                self.rows_skipped()
            );
        }
    }
}
