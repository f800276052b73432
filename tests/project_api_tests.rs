
use std::path::PathBuf;

use portfolio_site::{
    entities::project::ProjectWithTechnologies,
    repositories::project::ProjectRepository,
    settings::AppEnvironment,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn lists_all_seeded_projects_with_technologies() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let projects: Vec<ProjectWithTechnologies> = response.json().await.unwrap();
    assert_eq!(projects.len(), 6);

    let ids: Vec<i32> = projects.iter().map(|p| p.project.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert!(projects.iter().all(|p| p.technologies.len() == 3));
}

#[actix_rt::test]
async fn featured_endpoint_returns_exactly_the_three_featured_projects() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects/featured").await;
    assert_eq!(response.status(), StatusCode::OK);

    let featured: Vec<ProjectWithTechnologies> = response.json().await.unwrap();
    assert_eq!(featured.len(), 3);
    assert!(featured.iter().all(|p| p.project.featured));

    let titles: Vec<&str> = featured.iter().map(|p| p.project.title.as_str()).collect();
    assert_eq!(titles, vec!["E-commerce Dashboard", "Task Manager App", "Weather Forecast"]);
}

#[actix_rt::test]
async fn project_json_uses_camel_case_and_embeds_technologies() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects/6").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 6);
    assert_eq!(body["title"], "Recipe App");
    assert_eq!(body["repoUrl"], "https://github.com/brucemaber/recipe-app");
    assert_eq!(
        body["imageUrl"],
        "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80"
    );
    assert_eq!(body["featured"], false);
    assert!(body["updatedAt"].is_string());

    let technologies = body["technologies"].as_array().unwrap();
    let labels: Vec<&str> = technologies.iter().map(|t| t["technology"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["React Native", "Redux", "Firebase"]);
    assert_eq!(technologies[0]["projectId"], 6);
    assert_eq!(technologies[0]["category"], "mobile");
}

#[actix_rt::test]
async fn unknown_project_returns_404_with_message() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Project not found" }));
}

#[actix_rt::test]
async fn non_numeric_project_id_is_a_fault() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projects/not-a-number").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Failed to fetch project");
    assert!(body["details"].as_str().unwrap().contains("not-a-number"));
}

#[actix_rt::test]
async fn production_faults_hide_details() {
    let mut config = test_config();
    config.env = AppEnvironment::Production;
    let app = TestApp::spawn_with(config).await;

    let response = app.get("/api/projects/abc").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Failed to fetch project" }));
}

#[actix_rt::test]
async fn deleted_project_disappears_from_reads() {
    let app = TestApp::spawn().await;

    assert!(app.store.delete_project(2).await.unwrap());

    let response = app.get("/api/projects/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let featured: Vec<ProjectWithTechnologies> = app.get("/api/projects/featured").await.json().await.unwrap();
    assert_eq!(featured.len(), 2);
}

#[actix_rt::test]
async fn empty_store_lists_no_projects() {
    let mut config = test_config();
    config.seed_demo_data = false;
    let app = TestApp::spawn_with(config).await;

    let projects: Vec<Value> = app.get("/api/projects").await.json().await.unwrap();
    assert!(projects.is_empty());
}

#[actix_rt::test]
async fn write_methods_are_not_exposed() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .json(&json!({ "title": "New" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app.client
        .delete(app.url("/api/projects/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_rt::test]
async fn unmatched_api_path_returns_json_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Not found" }));
}

#[actix_rt::test]
async fn home_endpoint_returns_document_verbatim() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/home").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let raw = std::fs::read_to_string(&app.config.home_data_path).unwrap();
    let expected: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body, expected);
}

#[actix_rt::test]
async fn missing_home_document_returns_500() {
    let mut config = test_config();
    config.home_data_path = PathBuf::from(FIXTURES_DIR).join("does-not-exist.json");
    let app = TestApp::spawn_with(config).await;

    let response = app.get("/api/home").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Failed to fetch home data");
}

#[actix_rt::test]
async fn health_reports_record_counts() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["environment"], "testing");
    assert!(body["records"]["projects"].is_number());
    assert!(body["version"].is_string());
}
