//! Add-vlog form rules.
//!
//! The server only insists that every field is present (see [`NewVlog::has_missing_fields`]).
//! These stricter rules run on the client before anything is submitted.
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::NewVlog;

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above before submitting.";

static YOUTUBE_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?youtube\.com/embed/[\w-]+").expect("embed pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CreatorName,
    Title,
    Description,
    VideoUrl,
    Category,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub fn validate(form: &NewVlog) -> Vec<FieldError> {
    [
        validate_creator_name(&form.creator_name),
        validate_title(&form.title),
        validate_description(&form.description),
        validate_video_url(&form.video_url),
        validate_category(&form.category),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn min_length(
    value: &str,
    field: Field,
    min: usize,
    required: &'static str,
    too_short: &'static str,
) -> Option<FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Some(FieldError::new(field, required));
    }

    if value.chars().count() < min {
        return Some(FieldError::new(field, too_short));
    }

    None
}

fn validate_creator_name(value: &str) -> Option<FieldError> {
    min_length(
        value,
        Field::CreatorName,
        2,
        "Creator name is required",
        "Creator name must be at least 2 characters",
    )
}

fn validate_title(value: &str) -> Option<FieldError> {
    min_length(
        value,
        Field::Title,
        5,
        "Vlog title is required",
        "Vlog title must be at least 5 characters",
    )
}

fn validate_description(value: &str) -> Option<FieldError> {
    min_length(
        value,
        Field::Description,
        10,
        "Description is required",
        "Description must be at least 10 characters",
    )
}

fn validate_video_url(value: &str) -> Option<FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Some(FieldError::new(Field::VideoUrl, "Video URL is required"));
    }

    if !value.starts_with("https://") {
        return Some(FieldError::new(
            Field::VideoUrl,
            "Video URL must start with https://",
        ));
    }

    if !YOUTUBE_EMBED.is_match(value) {
        return Some(FieldError::new(
            Field::VideoUrl,
            "Please provide a valid YouTube embed URL (https://www.youtube.com/embed/...)",
        ));
    }

    None
}

fn validate_category(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(Field::Category, "Please select a category"));
    }

    None
}
