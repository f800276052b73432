use std::{sync::Arc, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use portfolio_site::{
    background_task::start_orphan_sweep_task,
    graceful_shutdown::shutdown_signal,
    repositories::memory_store::MemoryStore,
    routes::{configure_routes, spa},
    seed::seed_demo_projects,
    settings::AppConfig,
    use_cases::projects::ProjectHandler,
    AppState,
};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    if config.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let store = MemoryStore::new();

    if config.seed_demo_data {
        if let Err(e) = seed_demo_projects(&ProjectHandler::new(store.clone())).await {
            tracing::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }

    let static_dir = if config.static_dir.is_dir() {
        Some(config.static_dir.clone())
    } else if config.is_production() {
        tracing::error!(
            "Could not find the build directory: {}, make sure to build the client first",
            config.static_dir.display()
        );
        std::process::exit(1);
    } else {
        tracing::warn!(
            "Static build directory {} not found; serving the API only",
            config.static_dir.display()
        );
        None
    };

    let app_state = web::Data::new(AppState::new(&config, store.clone()));

    let server_addr = config.server_addr();

    tracing::info!(
        "Starting {} v{} ({}) on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        config.env,
        server_addr
    );

    let server = HttpServer::new(move || {
        let static_dir = static_dir.clone();

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .configure(move |cfg| {
                if let Some(dir) = static_dir {
                    spa::serve_from(dir)(cfg);
                }
            })
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    if config.orphan_sweep_interval_secs > 0 {
        tokio::spawn(start_orphan_sweep_task(
            Arc::new(ProjectHandler::new(store)),
            Duration::from_secs(config.orphan_sweep_interval_secs),
        ));
    }

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
