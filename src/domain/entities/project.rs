use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::{
    option_fields::{OptionField, PatchString},
    technology::Technology,
};

pub type ProjectId = i32;

const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;

// ───── Store Models ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub repo_url: String,
    pub image_url: Option<String>,
    pub stars: i32,
    pub forks: i32,
    pub views: i32,
    pub updated_at: DateTime<Utc>,
    pub featured: bool,
}

impl Project {
    /// Merges the supplied fields of `patch` and refreshes `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply(&mut self, patch: UpdateProject, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(repo_url) = patch.repo_url {
            self.repo_url = repo_url;
        }
        patch.image_url.apply_to(&mut self.image_url);
        if let Some(stars) = patch.stars {
            self.stars = stars;
        }
        if let Some(forks) = patch.forks {
            self.forks = forks;
        }
        if let Some(views) = patch.views {
            self.views = views;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = now.max(self.updated_at);
    }
}

// ───── API Response Models ──────────────────────────────────────────

/// A project with its technology rows attached, computed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithTechnologies {
    #[serde(flatten)]
    pub project: Project,
    pub technologies: Vec<Technology>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description cannot be empty"))]
    pub description: String,

    #[validate(custom(function = "validate_url"))]
    pub repo_url: String,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Stars cannot be negative"))]
    pub stars: Option<i32>,

    #[validate(range(min = 0, message = "Forks cannot be negative"))]
    pub forks: Option<i32>,

    #[validate(range(min = 0, message = "Views cannot be negative"))]
    pub views: Option<i32>,

    pub featured: Option<bool>,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            repo_url: repo_url.into(),
            ..Default::default()
        }
    }

    /// Builds the stored record, defaulting absent counters to 0 and
    /// `featured` to false.
    pub fn into_project(self, id: ProjectId, updated_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            repo_url: self.repo_url,
            image_url: self.image_url,
            stars: self.stars.unwrap_or(0),
            forks: self.forks.unwrap_or(0),
            views: self.views.unwrap_or(0),
            updated_at,
            featured: self.featured.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-120 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub repo_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_url_field"))]
    pub image_url: PatchString,

    #[validate(range(min = 0, message = "Stars cannot be negative"))]
    pub stars: Option<i32>,

    #[validate(range(min = 0, message = "Forks cannot be negative"))]
    pub forks: Option<i32>,

    #[validate(range(min = 0, message = "Views cannot be negative"))]
    pub views: Option<i32>,

    pub featured: Option<bool>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url_field(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
