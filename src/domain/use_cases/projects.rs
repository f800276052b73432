use validator::Validate;

use crate::{
    entities::{
        project::{NewProject, Project, ProjectId, ProjectWithTechnologies, UpdateProject},
        technology::{NewTechnology, Technology, TechnologyId},
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project with its technologies, in insertion order
    pub async fn list_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError> {
        self.project_repo.get_all_projects().await
    }

    /// Lists the projects flagged as featured
    pub async fn list_featured_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError> {
        self.project_repo.get_featured_projects().await
    }

    /// Retrieves a project by the raw id taken from the request path.
    ///
    /// An id that is not an integer is a fault, not an absence.
    pub async fn get_project(&self, raw_id: &str) -> Result<ProjectWithTechnologies, AppError> {
        let id = parse_project_id(raw_id)?;

        self.project_repo
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        let project = self.project_repo.create_project(request).await?;
        tracing::debug!(project_id = project.id, "created project");

        Ok(project)
    }

    pub async fn update_project(&self, id: ProjectId, request: UpdateProject) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo
            .update_project(id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Deletes a project. Returns false when nothing was removed.
    pub async fn delete_project(&self, id: ProjectId) -> Result<bool, AppError> {
        self.project_repo.delete_project(id).await
    }

    pub async fn add_technology(&self, request: NewTechnology) -> Result<Technology, AppError> {
        request.validate()?;

        self.project_repo.add_technology_to_project(request).await
    }

    pub async fn technologies_for(&self, project_id: ProjectId) -> Result<Vec<Technology>, AppError> {
        self.project_repo.get_technologies_for_project(project_id).await
    }

    pub async fn remove_technology(&self, id: TechnologyId) -> Result<bool, AppError> {
        self.project_repo.delete_technology_from_project(id).await
    }

    pub async fn purge_orphans(&self) -> Result<u64, AppError> {
        self.project_repo.purge_orphaned_technologies().await
    }
}

pub fn parse_project_id(raw_id: &str) -> Result<ProjectId, AppError> {
    raw_id
        .trim()
        .parse::<ProjectId>()
        .map_err(|e| AppError::internal(format!("Invalid project id '{}': {}", raw_id, e)))
}
