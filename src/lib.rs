mod domain;
mod interfaces;
pub mod errors;
pub mod api_errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod seed;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};

use handlers::system::HealthCache;
use repositories::memory_store::MemoryStore;
use use_cases::{home::HomeHandler, projects::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub home_handler: HomeHandler,
    pub environment: settings::AppEnvironment,
    pub expose_error_details: bool,
    pub health_cache: HealthCache,
}

pub type AppProjectHandler = ProjectHandler<MemoryStore>;

impl AppState {
    /// Wires the project handler to `store`.
    pub fn new(config: &settings::AppConfig, store: MemoryStore) -> Self {
        AppState {
            project_handler: ProjectHandler::new(store),
            home_handler: HomeHandler::new(config.home_data_path.clone()),
            environment: config.env.clone(),
            expose_error_details: config.expose_error_details(),
            health_cache: HealthCache::default(),
        }
    }
}
