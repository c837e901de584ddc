use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments parser for converting CSV annotations to COCO JSON.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    pub csv_file: PathBuf,

    /// Directory containing the referenced images
    pub image_dir: PathBuf,

    /// Destination path for the COCO JSON document
    pub output_json: PathBuf,
}
