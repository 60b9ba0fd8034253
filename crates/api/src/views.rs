//! View serialization for the public orphanage representation.
//!
//! Pure mapping from persisted entities to response shapes. The only
//! transformation is turning each image's stored filename into an
//! absolute URL under `/uploads`. Inputs are borrowed, never mutated.

use abrigo_core::types::DbId;
use abrigo_db::models::orphanage::{OrphanageImage, OrphanageWithImages};
use serde::Serialize;

/// Public representation of one orphanage.
#[derive(Debug, Serialize)]
pub struct OrphanageView {
    pub id: DbId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub images: Vec<ImageView>,
}

/// Public representation of one uploaded image.
#[derive(Debug, Serialize)]
pub struct ImageView {
    pub id: DbId,
    pub url: String,
}

/// Render a single orphanage.
pub fn render(entity: &OrphanageWithImages, public_base_url: &str) -> OrphanageView {
    let orphanage = &entity.orphanage;
    OrphanageView {
        id: orphanage.id,
        name: orphanage.name.clone(),
        latitude: orphanage.latitude,
        longitude: orphanage.longitude,
        about: orphanage.about.clone(),
        instructions: orphanage.instructions.clone(),
        opening_hours: orphanage.opening_hours.clone(),
        open_on_weekends: orphanage.open_on_weekends,
        images: entity
            .images
            .iter()
            .map(|image| render_image(image, public_base_url))
            .collect(),
    }
}

/// Render a collection of orphanages, preserving input order.
pub fn render_many(entities: &[OrphanageWithImages], public_base_url: &str) -> Vec<OrphanageView> {
    entities
        .iter()
        .map(|entity| render(entity, public_base_url))
        .collect()
}

fn render_image(image: &OrphanageImage, public_base_url: &str) -> ImageView {
    ImageView {
        id: image.id,
        url: format!("{public_base_url}/uploads/{}", image.path),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use abrigo_db::models::orphanage::Orphanage;

    use super::*;

    fn entity(images: Vec<OrphanageImage>) -> OrphanageWithImages {
        let now = chrono::Utc::now();
        OrphanageWithImages {
            orphanage: Orphanage {
                id: 1,
                name: "Lar das meninas".into(),
                latitude: -25.5039738,
                longitude: -49.2559137,
                about: "Sobre o orfanato".into(),
                instructions: "Venha visitar".into(),
                opening_hours: "Das 8h até 18h".into(),
                open_on_weekends: true,
                created_at: now,
                updated_at: now,
            },
            images,
        }
    }

    #[test]
    fn image_paths_become_absolute_urls() {
        let view = render(
            &entity(vec![OrphanageImage {
                id: 10,
                orphanage_id: 1,
                path: "abc-photo.png".into(),
                position: 0,
            }]),
            "http://localhost:3333",
        );
        assert_eq!(view.images.len(), 1);
        assert_eq!(view.images[0].url, "http://localhost:3333/uploads/abc-photo.png");
    }

    #[test]
    fn images_array_is_present_when_empty() {
        let view = render(&entity(Vec::new()), "http://localhost:3333");
        assert!(view.images.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["images"], serde_json::json!([]));
    }

    #[test]
    fn render_many_preserves_order() {
        let entities = vec![entity(Vec::new()), entity(Vec::new())];
        let views = render_many(&entities, "http://localhost:3333");
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn image_order_is_preserved() {
        let view = render(
            &entity(vec![
                OrphanageImage {
                    id: 1,
                    orphanage_id: 1,
                    path: "first.png".into(),
                    position: 0,
                },
                OrphanageImage {
                    id: 2,
                    orphanage_id: 1,
                    path: "second.png".into(),
                    position: 1,
                },
            ]),
            "https://cdn.example.com",
        );
        let urls: Vec<&str> = view.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://cdn.example.com/uploads/first.png",
                "https://cdn.example.com/uploads/second.png",
            ]
        );
    }
}
