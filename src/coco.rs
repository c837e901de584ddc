//! COCO format data structures and the category registry
//!
//! This module provides the output-side data model: the records that make up
//! a COCO-style JSON document and the registry that assigns stable ids to
//! category labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// COCO image information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: u32,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new(id: u32, file_name: String, width: u32, height: u32) -> Self {
        Self {
            id,
            file_name,
            width,
            height,
        }
    }
}

/// COCO annotation information. `bbox` is `[x, y, width, height]` with the
/// origin at the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u32,
    pub image_id: u32,
    pub bbox: [f64; 4],
    pub category_id: u32,
}

impl Annotation {
    pub fn new(id: u32, image_id: u32, bbox: [f64; 4], category_id: u32) -> Self {
        Self {
            id,
            image_id,
            bbox,
            category_id,
        }
    }
}

/// COCO category information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Complete COCO document structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
}

/// Maps category labels to stable 1-based ids, assigned in first-seen order.
///
/// The registry is append-only for the duration of a run: an id is never
/// reused or reassigned, and `lookup_or_create` is the sole mutation path.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    label_map: HashMap<String, u32>,
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id registered for `label`, assigning the next sequential id
    /// on first sight.
    pub fn lookup_or_create(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_map.get(label) {
            return id;
        }
        let id = self.categories.len() as u32 + 1;
        self.label_map.insert(label.to_string(), id);
        self.categories.push(Category {
            id,
            name: label.to_string(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Consume the registry, yielding the categories in creation order.
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}
