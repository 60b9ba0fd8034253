//! Handlers for the `/orphanages` resource.

use abrigo_core::error::CoreError;
use abrigo_core::types::DbId;
use abrigo_core::validation::{validate_draft, ImageDraft, OrphanageDraft};
use abrigo_db::models::orphanage::{CreateOrphanage, OrphanageWithImages};
use abrigo_db::repositories::OrphanageRepo;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, OrphanageView};

/// GET /orphanages
///
/// List all orphanages with their images.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrphanageView>>> {
    let orphanages = OrphanageRepo::list_all(&state.pool).await?;
    Ok(Json(views::render_many(
        &orphanages,
        &state.config.public_base_url,
    )))
}

/// GET /orphanages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrphanageView>> {
    let orphanage = OrphanageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Orphanage",
            id,
        }))?;
    Ok(Json(views::render(&orphanage, &state.config.public_base_url)))
}

/// POST /orphanages
///
/// Multipart form: the seven descriptive text fields plus zero or more
/// `images` file parts. Uploaded files are stored under the configured
/// upload directory before validation, matching the upload-middleware
/// behavior the endpoint was designed against.
///
/// Responds 201 with the persisted entity serialized from the row models
/// directly, not through the view layer. List and detail render image
/// URLs; create returns stored paths.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<OrphanageWithImages>)> {
    let mut draft = OrphanageDraft::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" => {
                let original = field.file_name().unwrap_or("image").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let path = store_upload(&state, &original, &data).await?;
                draft.images.push(ImageDraft { path });
            }
            "name" => draft.name = Some(read_text(field).await?),
            "latitude" => draft.latitude = Some(read_text(field).await?),
            "longitude" => draft.longitude = Some(read_text(field).await?),
            "about" => draft.about = Some(read_text(field).await?),
            "instructions" => draft.instructions = Some(read_text(field).await?),
            "opening_hours" => draft.opening_hours = Some(read_text(field).await?),
            "open_on_weekends" => draft.open_on_weekends = Some(read_text(field).await?),
            _ => {} // ignore unknown fields
        }
    }

    let valid = validate_draft(&draft).map_err(CoreError::Validation)?;

    let input = CreateOrphanage::from(valid);
    let orphanage = OrphanageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(orphanage)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Write an uploaded file to the upload directory under a unique stored
/// filename, returning that filename.
async fn store_upload(state: &AppState, original: &str, data: &[u8]) -> AppResult<String> {
    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored = format!("{}-{}", Uuid::new_v4(), sanitize_filename(original));
    tokio::fs::write(upload_dir.join(&stored), data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(stored)
}

/// Reduce a client-supplied filename to its final component so a stored
/// name can never escape the upload directory.
fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        "image".to_string()
    } else {
        base.to_string()
    }
}
