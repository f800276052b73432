use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::project::ProjectId;

pub type TechnologyId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    #[display("frontend")]
    Frontend,
    #[display("backend")]
    Backend,
    #[display("database")]
    Database,
    #[display("language")]
    Language,
    #[display("mobile")]
    Mobile,
    #[display("state")]
    State,
    #[display("styling")]
    Styling,
    #[display("other")]
    Other,
}

/// A labelled tag attached to a project. `project_id` is a plain reference;
/// nothing guarantees the project still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: TechnologyId,
    pub project_id: ProjectId,
    pub technology: String,
    pub category: TechnologyCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTechnology {
    pub project_id: ProjectId,

    #[validate(length(min = 1, max = 60, message = "Technology label must be 1-60 characters"))]
    pub technology: String,

    pub category: TechnologyCategory,
}

impl NewTechnology {
    pub fn new(project_id: ProjectId, technology: impl Into<String>, category: TechnologyCategory) -> Self {
        Self {
            project_id,
            technology: technology.into(),
            category,
        }
    }

    pub fn into_technology(self, id: TechnologyId) -> Technology {
        Technology {
            id,
            project_id: self.project_id,
            technology: self.technology,
            category: self.category,
        }
    }
}
