//! Feedback API Handlers
//!
//! Accepts star-rated visitor feedback with an optional photo.
//! Photos are validated, re-encoded as JPEG and stored under
//! work_dir/uploads/feedback.

use std::fs;
use std::path::PathBuf;

use axum::extract::{Multipart, State};
use axum::Json;
use uuid::Uuid;

use shared::client::FeedbackSubmitted;
use shared::models::parse_rating;

use crate::core::ServerState;
use crate::db::models::FeedbackCreate;
use crate::db::repository::FeedbackRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// Maximum photo size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality for stored feedback photos
const JPEG_QUALITY: u8 = 85;

/// How many entries the public wall shows
const RECENT_LIMIT: usize = 20;

/// POST /api/feedback - 提交评价 (multipart)
///
/// rating 字段既接受页面渲染的星符串 ("⭐⭐⭐")，也接受纯数字文本；
/// 识别不了的值按 5 星处理。
pub async fn submit(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<AppResponse<FeedbackSubmitted>>> {
    let mut name = None;
    let mut email = None;
    let mut experience = None;
    let mut rating = None;
    let mut image_upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref().unwrap_or("") {
            "name" => name = Some(field.text().await?),
            "email" => email = Some(field.text().await?),
            "experience" => experience = Some(field.text().await?),
            "rating" => rating = Some(field.text().await?),
            "image" => {
                let filename = field.file_name().map(|s| s.to_string());
                let data = field.bytes().await?.to_vec();
                // 浏览器对空的 file input 也会发一个空 part
                if let Some(filename) = filename
                    && !data.is_empty()
                {
                    image_upload = Some((filename, data));
                }
            }
            _ => {}
        }
    }

    let name = name.unwrap_or_default();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;

    let experience = experience.unwrap_or_default();
    validate_required_text(&experience, "experience", MAX_TEXT_LEN)?;

    let email = email.filter(|e| !e.trim().is_empty());
    validate_optional_text(&email, "email", MAX_EMAIL_LEN)?;

    // Convert rating stars to number (unrecognized -> 5)
    let rating_value = parse_rating(rating.as_deref().unwrap_or(""));

    let image = match image_upload {
        Some((filename, data)) => Some(store_feedback_image(&state, &filename, data)?),
        None => None,
    };

    let repo = FeedbackRepository::new(state.get_db());
    let feedback = repo
        .create(FeedbackCreate {
            name,
            email,
            experience,
            rating: rating_value,
            image,
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let id = feedback.id.map(|t| t.to_string()).unwrap_or_default();

    tracing::info!(
        feedback_id = %id,
        rating = rating_value,
        "Feedback submitted"
    );

    Ok(ok_with_message(
        FeedbackSubmitted { id },
        "Thank you for your feedback!",
    ))
}

/// GET /api/feedback - 最近评价 (访客墙)
///
/// 公共接口不回传留言者邮箱。
pub async fn list_recent(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<shared::models::Feedback>>>> {
    let repo = FeedbackRepository::new(state.get_db());
    let feedback = repo
        .find_recent(RECENT_LIMIT)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let feedback: Vec<shared::models::Feedback> = feedback
        .into_iter()
        .map(|row| {
            let mut f: shared::models::Feedback = row.into();
            f.email = None;
            f
        })
        .collect();

    Ok(ok(feedback))
}

/// GET /api/feedback/all - 全量评价记录 (管理员)
pub async fn list_all(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<shared::models::Feedback>>>> {
    let repo = FeedbackRepository::new(state.get_db());
    let feedback = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ok(feedback.into_iter().map(Into::into).collect()))
}

/// Validate, re-encode and store an uploaded feedback photo.
///
/// Returns the stored filename (served under `/uploads/feedback/`).
fn store_feedback_image(
    state: &ServerState,
    original_name: &str,
    data: Vec<u8>,
) -> Result<String, AppError> {
    // Check file size
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    // Check file extension
    let ext = PathBuf::from(original_name)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_lowercase()))
        .ok_or_else(|| {
            AppError::validation(format!("Invalid file extension for: {}", original_name))
        })?;

    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by loading it
    let img = image::load_from_memory(&data)
        .map_err(|e| AppError::validation(format!("Invalid image file ({}): {}", ext, e)))?;

    // Re-encode as JPEG with quality setting
    let mut buffer = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }

    let images_dir = state.config.feedback_images_dir();
    fs::create_dir_all(&images_dir)
        .map_err(|e| AppError::internal(format!("Failed to create images directory: {}", e)))?;

    let new_filename = format!("{}.jpg", Uuid::new_v4());
    let file_path = images_dir.join(&new_filename);

    fs::write(&file_path, &buffer)
        .map_err(|e| AppError::internal(format!("Failed to save file: {}", e)))?;

    tracing::info!(
        original_name = %original_name,
        stored = %new_filename,
        size = buffer.len(),
        "Feedback image stored"
    );

    Ok(new_filename)
}
