//! Orphanage draft validation — pure logic, no database access.
//!
//! The create endpoint receives a multipart form, so every field arrives
//! as an optional string. [`validate_draft`] checks the whole draft and
//! either returns a fully typed [`ValidOrphanage`] or the complete list
//! of [`FieldViolation`]s. Evaluation never stops at the first failure.

use serde::Serialize;

/// Maximum length of the `about` text, in characters.
pub const ABOUT_MAX_CHARS: usize = 300;

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw create input as it arrived on the wire, before any checking.
///
/// Text fields are `None` when the form part was absent entirely.
#[derive(Debug, Clone, Default)]
pub struct OrphanageDraft {
    pub name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub about: Option<String>,
    pub instructions: Option<String>,
    pub opening_hours: Option<String>,
    pub open_on_weekends: Option<String>,
    pub images: Vec<ImageDraft>,
}

/// A stored upload awaiting validation.
#[derive(Debug, Clone)]
pub struct ImageDraft {
    pub path: String,
}

/// A draft that passed every rule, with fields coerced to their final types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrphanage {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub image_paths: Vec<String>,
}

/// Validate a draft, aggregating all violations before failing.
///
/// `open_on_weekends` is coerced by exact equality to the literal
/// `"true"`: `"True"`, `"1"` and every other value coerce to `false`.
/// The field is still required to be present.
pub fn validate_draft(draft: &OrphanageDraft) -> Result<ValidOrphanage, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = required_text("name", draft.name.as_deref(), &mut violations);
    let latitude = required_number("latitude", draft.latitude.as_deref(), &mut violations);
    let longitude = required_number("longitude", draft.longitude.as_deref(), &mut violations);
    let about = required_text("about", draft.about.as_deref(), &mut violations);
    let instructions = required_text("instructions", draft.instructions.as_deref(), &mut violations);
    let opening_hours = required_text("opening_hours", draft.opening_hours.as_deref(), &mut violations);

    if let Some(about) = &about {
        if about.chars().count() > ABOUT_MAX_CHARS {
            violations.push(FieldViolation::new(
                "about",
                format!("must be at most {ABOUT_MAX_CHARS} characters"),
            ));
        }
    }

    let open_on_weekends = match draft.open_on_weekends.as_deref() {
        Some(value) => Some(value == "true"),
        None => {
            violations.push(FieldViolation::new("open_on_weekends", "is required"));
            None
        }
    };

    for (index, image) in draft.images.iter().enumerate() {
        if image.path.is_empty() {
            violations.push(FieldViolation::new(
                format!("images[{index}].path"),
                "is required",
            ));
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    // All `unwrap`s are safe: a `None` field always pushed a violation.
    Ok(ValidOrphanage {
        name: name.unwrap(),
        latitude: latitude.unwrap(),
        longitude: longitude.unwrap(),
        about: about.unwrap(),
        instructions: instructions.unwrap(),
        opening_hours: opening_hours.unwrap(),
        open_on_weekends: open_on_weekends.unwrap(),
        image_paths: draft.images.iter().map(|i| i.path.clone()).collect(),
    })
}

fn required_text(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}

fn required_number(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let text = match value {
        Some(text) if !text.is_empty() => text,
        _ => {
            violations.push(FieldViolation::new(field, "is required"));
            return None;
        }
    };
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            violations.push(FieldViolation::new(field, "must be a number"));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
