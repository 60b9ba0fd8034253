//! Repository for the `orphanages` and `orphanage_images` tables.

use std::collections::HashMap;

use abrigo_core::types::DbId;
use sqlx::PgPool;

use crate::models::orphanage::{CreateOrphanage, Orphanage, OrphanageImage, OrphanageWithImages};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, latitude, longitude, about, instructions, \
                       opening_hours, open_on_weekends, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, orphanage_id, path, position";

/// Provides persistence operations for orphanages.
pub struct OrphanageRepo;

impl OrphanageRepo {
    /// Insert a new orphanage and its images in a single transaction,
    /// returning the created entity.
    ///
    /// Image positions follow the order of `input.image_paths`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrphanage,
    ) -> Result<OrphanageWithImages, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO orphanages
                (name, latitude, longitude, about, instructions, opening_hours, open_on_weekends)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let orphanage = sqlx::query_as::<_, Orphanage>(&query)
            .bind(&input.name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.about)
            .bind(&input.instructions)
            .bind(&input.opening_hours)
            .bind(input.open_on_weekends)
            .fetch_one(&mut *tx)
            .await?;

        let image_query = format!(
            "INSERT INTO orphanage_images (orphanage_id, path, position)
             VALUES ($1, $2, $3)
             RETURNING {IMAGE_COLUMNS}"
        );
        let mut images = Vec::with_capacity(input.image_paths.len());
        for (position, path) in input.image_paths.iter().enumerate() {
            let image = sqlx::query_as::<_, OrphanageImage>(&image_query)
                .bind(orphanage.id)
                .bind(path)
                .bind(position as i32)
                .fetch_one(&mut *tx)
                .await?;
            images.push(image);
        }

        tx.commit().await?;

        Ok(OrphanageWithImages { orphanage, images })
    }

    /// Find an orphanage by its internal ID, with images in upload order.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrphanageWithImages>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orphanages WHERE id = $1");
        let Some(orphanage) = sqlx::query_as::<_, Orphanage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let image_query = format!(
            "SELECT {IMAGE_COLUMNS} FROM orphanage_images
             WHERE orphanage_id = $1
             ORDER BY position, id"
        );
        let images = sqlx::query_as::<_, OrphanageImage>(&image_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(OrphanageWithImages { orphanage, images }))
    }

    /// List all orphanages with their images, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<OrphanageWithImages>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orphanages ORDER BY id");
        let orphanages = sqlx::query_as::<_, Orphanage>(&query)
            .fetch_all(pool)
            .await?;

        let image_query = format!(
            "SELECT {IMAGE_COLUMNS} FROM orphanage_images ORDER BY orphanage_id, position, id"
        );
        let all_images = sqlx::query_as::<_, OrphanageImage>(&image_query)
            .fetch_all(pool)
            .await?;

        let mut by_orphanage: HashMap<DbId, Vec<OrphanageImage>> = HashMap::new();
        for image in all_images {
            by_orphanage.entry(image.orphanage_id).or_default().push(image);
        }

        Ok(orphanages
            .into_iter()
            .map(|orphanage| {
                let images = by_orphanage.remove(&orphanage.id).unwrap_or_default();
                OrphanageWithImages { orphanage, images }
            })
            .collect())
    }
}
