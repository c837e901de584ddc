use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::coco::{Annotation, CategoryRegistry, CocoFile, Image};
use crate::error::ConvertError;
use crate::io::{distinct_image_names, load_rows, write_coco_file};
use crate::types::{ConversionStats, Row};
use crate::utils::{create_progress_bar, read_image_dimensions};

/// Build one annotation from a row.
///
/// The box is `[x, y, width, height]` with `x = h_min`, `y = w_min`,
/// `width = h_max - h_min`, `height = w_max - w_min`, taken literally from
/// the row: an inverted coordinate pair passes through as a negative extent.
pub fn annotation_from_row(
    row: &Row,
    annotation_id: u32,
    image_id: u32,
    registry: &mut CategoryRegistry,
) -> Annotation {
    let bbox = [
        row.h_min,
        row.w_min,
        row.h_max - row.h_min,
        row.w_max - row.w_min,
    ];
    let category_id = registry.lookup_or_create(&row.category_label);
    Annotation::new(annotation_id, image_id, bbox, category_id)
}

/// Convert loaded rows into a COCO document.
///
/// Images are visited in first-occurrence order. An image that cannot be
/// resolved under `image_dir` is skipped together with all of its rows, with
/// a warning naming the path; the run continues with the next image. Image,
/// annotation, and category ids are each dense 1-based sequences in creation
/// order, so a skipped image never leaves a hole in the id space.
pub fn build_document(rows: &[Row], image_dir: &Path) -> (CocoFile, ConversionStats) {
    let image_names = distinct_image_names(rows);

    // Group rows by image up front so each image's rows keep their original
    // table order when visited.
    let mut rows_by_image: HashMap<&str, Vec<&Row>> = HashMap::new();
    for row in rows {
        rows_by_image
            .entry(row.image_name.as_str())
            .or_default()
            .push(row);
    }

    let mut coco = CocoFile::default();
    let mut registry = CategoryRegistry::new();
    let mut stats = ConversionStats {
        rows_total: rows.len(),
        distinct_images: image_names.len(),
        ..Default::default()
    };

    let mut next_image_id: u32 = 0;
    let mut next_annotation_id: u32 = 0;

    let pb = create_progress_bar(image_names.len() as u64, "Images");
    for image_name in &image_names {
        pb.inc(1);

        let image_path = image_dir.join(image_name);
        let (width, height) = match read_image_dimensions(&image_path) {
            Ok(dimensions) => dimensions,
            Err(e) => {
                warn!("Skipping image {}: {}", image_path.display(), e);
                stats.images_skipped += 1;
                continue;
            }
        };

        next_image_id += 1;
        coco.images
            .push(Image::new(next_image_id, image_name.clone(), width, height));
        stats.images_converted += 1;

        if let Some(image_rows) = rows_by_image.get(image_name.as_str()) {
            for row in image_rows {
                next_annotation_id += 1;
                coco.annotations.push(annotation_from_row(
                    row,
                    next_annotation_id,
                    next_image_id,
                    &mut registry,
                ));
            }
        }
    }
    pb.finish();

    stats.annotations_written = coco.annotations.len();
    stats.categories_registered = registry.len();
    coco.categories = registry.into_categories();

    (coco, stats)
}

/// Run the full conversion: load the table, build the document, write it.
///
/// Loader and writer failures abort the run; per-image resolution failures
/// only shrink the output. Returns the run statistics so callers can tell a
/// complete conversion from a partial one.
pub fn convert_csv_to_coco(
    csv_file: &Path,
    image_dir: &Path,
    output_json: &Path,
) -> Result<ConversionStats, ConvertError> {
    let rows = load_rows(csv_file)?;
    info!("Loaded {} rows from {}", rows.len(), csv_file.display());

    let (coco, stats) = build_document(&rows, image_dir);

    write_coco_file(&coco, output_json)?;
    stats.print_summary();

    Ok(stats)
}
