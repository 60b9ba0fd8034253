//! Orphanage entity models and DTOs.
//!
//! Covers two related tables:
//! - `orphanages` -- the registered institutions
//! - `orphanage_images` -- uploaded photos, owned by their orphanage

use abrigo_core::types::{DbId, Timestamp};
use abrigo_core::validation::ValidOrphanage;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `orphanages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Orphanage {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `orphanage_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrphanageImage {
    pub id: DbId,
    pub orphanage_id: DbId,
    pub path: String,
    pub position: i32,
}

/// An orphanage together with its images, ordered by upload position.
///
/// The `images` field is always present in responses, even when empty.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanageWithImages {
    #[serde(flatten)]
    pub orphanage: Orphanage,
    pub images: Vec<OrphanageImage>,
}

/// DTO for creating a new orphanage with its images in one operation.
#[derive(Debug, Clone)]
pub struct CreateOrphanage {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    /// Stored filenames in upload order.
    pub image_paths: Vec<String>,
}

impl From<ValidOrphanage> for CreateOrphanage {
    fn from(valid: ValidOrphanage) -> Self {
        Self {
            name: valid.name,
            latitude: valid.latitude,
            longitude: valid.longitude,
            about: valid.about,
            instructions: valid.instructions,
            opening_hours: valid.opening_hours,
            open_on_weekends: valid.open_on_weekends,
            image_paths: valid.image_paths,
        }
    }
}
