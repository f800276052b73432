use async_trait::async_trait;
use chrono::Utc;

use crate::{
    entities::{
        project::{NewProject, Project, ProjectId, ProjectWithTechnologies, UpdateProject},
        technology::{NewTechnology, Technology, TechnologyId},
    },
    errors::AppError,
    repositories::memory_store::{MemoryStore, RecordCounts},
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project under the next id. Never fails for the in-memory store.
    async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;

    /// Merges `patch` over an existing project. `Ok(None)` when the id is unknown.
    async fn update_project(&self, id: ProjectId, patch: UpdateProject) -> Result<Option<Project>, AppError>;

    /// Removes a project without touching its technology rows.
    async fn delete_project(&self, id: ProjectId) -> Result<bool, AppError>;

    async fn get_project(&self, id: ProjectId) -> Result<Option<ProjectWithTechnologies>, AppError>;
    async fn get_all_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError>;
    async fn get_featured_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError>;

    async fn add_technology_to_project(&self, technology: NewTechnology) -> Result<Technology, AppError>;
    async fn get_technologies_for_project(&self, project_id: ProjectId) -> Result<Vec<Technology>, AppError>;
    async fn delete_technology_from_project(&self, id: TechnologyId) -> Result<bool, AppError>;

    /// Drops technology rows whose project no longer exists.
    async fn purge_orphaned_technologies(&self) -> Result<u64, AppError>;

    async fn count_records(&self) -> Result<RecordCounts, AppError>;
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let mut tables = self.tables.write();
        let id = tables.allocate_project_id();
        let project = project.into_project(id, Utc::now());
        tables.projects.insert(id, project.clone());

        Ok(project)
    }

    async fn update_project(&self, id: ProjectId, patch: UpdateProject) -> Result<Option<Project>, AppError> {
        let mut tables = self.tables.write();
        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(None);
        };

        project.apply(patch, Utc::now());

        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool, AppError> {
        Ok(self.tables.write().projects.remove(&id).is_some())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<ProjectWithTechnologies>, AppError> {
        let tables = self.tables.read();

        Ok(tables.projects.get(&id).map(|project| ProjectWithTechnologies {
            project: project.clone(),
            technologies: tables.technologies_for(id),
        }))
    }

    async fn get_all_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError> {
        let tables = self.tables.read();

        Ok(tables
            .projects
            .values()
            .map(|project| ProjectWithTechnologies {
                project: project.clone(),
                technologies: tables.technologies_for(project.id),
            })
            .collect())
    }

    async fn get_featured_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError> {
        let tables = self.tables.read();

        Ok(tables
            .projects
            .values()
            .filter(|project| project.featured)
            .map(|project| ProjectWithTechnologies {
                project: project.clone(),
                technologies: tables.technologies_for(project.id),
            })
            .collect())
    }

    async fn add_technology_to_project(&self, technology: NewTechnology) -> Result<Technology, AppError> {
        let mut tables = self.tables.write();
        let id = tables.allocate_technology_id();
        let technology = technology.into_technology(id);
        tables.technologies.insert(id, technology.clone());

        Ok(technology)
    }

    async fn get_technologies_for_project(&self, project_id: ProjectId) -> Result<Vec<Technology>, AppError> {
        Ok(self.tables.read().technologies_for(project_id))
    }

    async fn delete_technology_from_project(&self, id: TechnologyId) -> Result<bool, AppError> {
        Ok(self.tables.write().technologies.remove(&id).is_some())
    }

    async fn purge_orphaned_technologies(&self) -> Result<u64, AppError> {
        let mut guard = self.tables.write();
        let tables = &mut *guard;
        let before = tables.technologies.len();

        let projects = &tables.projects;
        tables.technologies.retain(|_, tech| projects.contains_key(&tech.project_id));

        Ok((before - tables.technologies.len()) as u64)
    }

    async fn count_records(&self) -> Result<RecordCounts, AppError> {
        let tables = self.tables.read();

        Ok(RecordCounts {
            projects: tables.projects.len(),
            technologies: tables.technologies.len(),
            accounts: tables.accounts.len(),
        })
    }
}
