use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use serde_json::{json, Value};

use portfolio_site::{
    entities::{
        option_fields::OptionField,
        project::{NewProject, Project, ProjectId, ProjectWithTechnologies, UpdateProject},
        technology::{NewTechnology, Technology, TechnologyCategory, TechnologyId},
    },
    api_errors::EdgeError,
    errors::AppError,
    repositories::{
        memory_store::{MemoryStore, RecordCounts},
        project::ProjectRepository,
    },
    seed::seed_demo_projects,
    use_cases::projects::ProjectHandler,
};

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;
        async fn update_project(&self, id: ProjectId, patch: UpdateProject) -> Result<Option<Project>, AppError>;
        async fn delete_project(&self, id: ProjectId) -> Result<bool, AppError>;
        async fn get_project(&self, id: ProjectId) -> Result<Option<ProjectWithTechnologies>, AppError>;
        async fn get_all_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError>;
        async fn get_featured_projects(&self) -> Result<Vec<ProjectWithTechnologies>, AppError>;
        async fn add_technology_to_project(&self, technology: NewTechnology) -> Result<Technology, AppError>;
        async fn get_technologies_for_project(&self, project_id: ProjectId) -> Result<Vec<Technology>, AppError>;
        async fn delete_technology_from_project(&self, id: TechnologyId) -> Result<bool, AppError>;
        async fn purge_orphaned_technologies(&self) -> Result<u64, AppError>;
        async fn count_records(&self) -> Result<RecordCounts, AppError>;
    }
}

async fn body_json(err: &impl ResponseError) -> Value {
    let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_rt::test]
async fn store_fault_becomes_a_500_with_context() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects()
        .times(1)
        .returning(|| Err(AppError::internal("tables unavailable")));

    let handler = ProjectHandler::new(repo);
    let err = handler
        .list_projects()
        .await
        .unwrap_err()
        .into_fault("Failed to fetch projects", true);

    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(&err).await,
        json!({ "message": "Failed to fetch projects", "details": "tables unavailable" })
    );
}

#[actix_rt::test]
async fn fault_details_are_dropped_when_not_exposed() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_featured_projects()
        .returning(|| Err(AppError::internal("boom")));

    let err = ProjectHandler::new(repo)
        .list_featured_projects()
        .await
        .unwrap_err()
        .into_fault("Failed to fetch featured projects", false);

    assert_eq!(body_json(&err).await, json!({ "message": "Failed to fetch featured projects" }));
}

#[actix_rt::test]
async fn missing_project_maps_to_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project()
        .with(eq(99999))
        .times(1)
        .returning(|_| Ok(None));

    let err = ProjectHandler::new(repo).get_project("99999").await.unwrap_err();

    let err = err.into_fault("Failed to fetch project", true);
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&err).await, json!({ "message": "Project not found" }));
}

#[actix_rt::test]
async fn unparseable_id_never_reaches_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project().never();

    let err = ProjectHandler::new(repo).get_project("12abc").await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn invalid_new_project_is_rejected_before_storage() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let err = ProjectHandler::new(repo)
        .create_project(NewProject {
            stars: Some(-1),
            ..NewProject::new("", "desc", "ftp://example.com/repo")
        })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    let AppError::ValidationError(fields) = err else {
        panic!("expected validation error");
    };
    assert_eq!(fields.len(), 3);
    let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
    assert!(names.contains(&"title"));
    assert!(names.contains(&"stars"));
}

#[actix_rt::test]
async fn invalid_image_patch_is_rejected() {
    let handler = ProjectHandler::new(MemoryStore::new());
    let project = handler
        .create_project(NewProject::new("Site", "Portfolio", "https://example.com/site"))
        .await
        .unwrap();

    let err = handler
        .update_project(project.id, UpdateProject {
            image_url: OptionField::SetToValue("not a url".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let err = handler.update_project(999, UpdateProject::default()).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn seeding_creates_six_projects_three_featured() {
    let handler = ProjectHandler::new(MemoryStore::new());

    let ids = seed_demo_projects(&handler).await.unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let featured = handler.list_featured_projects().await.unwrap();
    assert_eq!(featured.len(), 3);

    let counts = handler.project_repo.count_records().await.unwrap();
    assert_eq!(counts.technologies, 18);

    let recipe = handler.get_project("6").await.unwrap();
    assert_eq!(recipe.technologies[0].category, TechnologyCategory::Mobile);
}

#[actix_rt::test]
async fn removing_a_technology_detaches_it_from_the_project() {
    let handler = ProjectHandler::new(MemoryStore::new());
    let project = handler
        .create_project(NewProject::new("Site", "Portfolio", "https://example.com/site"))
        .await
        .unwrap();
    let tech = handler
        .add_technology(NewTechnology::new(project.id, "Rust", TechnologyCategory::Language))
        .await
        .unwrap();

    assert!(handler.remove_technology(tech.id).await.unwrap());
    assert!(!handler.remove_technology(tech.id).await.unwrap());
    assert!(handler.technologies_for(project.id).await.unwrap().is_empty());

    assert!(handler.delete_project(project.id).await.unwrap());
    assert!(!handler.delete_project(project.id).await.unwrap());
}

#[actix_rt::test]
async fn edge_faults_render_error_bodies() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects()
        .times(1)
        .returning(|| Err(AppError::internal("tables unavailable")));
    repo.expect_get_featured_projects()
        .times(1)
        .returning(|| Err(AppError::internal("tables unavailable")));

    let handler = ProjectHandler::new(repo);

    let cause = handler.list_projects().await.unwrap_err();
    let err = EdgeError::fault("Failed to fetch projects", cause);
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(&err).await, json!({ "error": "Failed to fetch projects" }));

    let cause = handler.list_featured_projects().await.unwrap_err();
    let err = EdgeError::fault("Failed to fetch featured projects", cause);
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(&err).await, json!({ "error": "Failed to fetch featured projects" }));
}

#[actix_rt::test]
async fn patch_body_distinguishes_null_from_absent_image() {
    let handler = ProjectHandler::new(MemoryStore::new());
    let project = handler
        .create_project(NewProject {
            image_url: Some("https://example.com/cover.png".into()),
            ..NewProject::new("Site", "Portfolio", "https://example.com/site")
        })
        .await
        .unwrap();

    let untouched: UpdateProject = serde_json::from_value(json!({ "stars": 3 })).unwrap();
    let updated = handler.update_project(project.id, untouched).await.unwrap();
    assert_eq!(updated.image_url.as_deref(), Some("https://example.com/cover.png"));
    assert_eq!(updated.stars, 3);

    let bad: UpdateProject = serde_json::from_value(json!({ "imageUrl": "ftp://example.com/x" })).unwrap();
    let err = handler.update_project(project.id, bad).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let cleared: UpdateProject = serde_json::from_value(json!({ "imageUrl": null })).unwrap();
    let updated = handler.update_project(project.id, cleared).await.unwrap();
    assert!(updated.image_url.is_none());
}
