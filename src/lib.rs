//! CSV to COCO format converter
//!
//! This library converts tabular bounding-box annotations into a COCO-style
//! JSON document describing images, annotations, and categories.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{Annotation, Category, CategoryRegistry, CocoFile, Image};
pub use config::Args;
pub use conversion::{annotation_from_row, build_document, convert_csv_to_coco};
pub use error::{ConvertError, ImageReadError};
pub use io::{distinct_image_names, load_rows, write_coco_file};
pub use types::{ConversionStats, Row, REQUIRED_COLUMNS};
