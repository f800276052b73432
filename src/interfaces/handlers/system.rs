use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use parking_lot::RwLock;
use chrono::Utc;
use std::{
    time::Duration,
    sync::atomic::{AtomicI64, Ordering},
};
use sysinfo::System;
use serde::Serialize;

use crate::{
    constants::{HEALTH_CACHE_SECS, START_TIME},
    repositories::{memory_store::RecordCounts, project::ProjectRepository},
    AppState,
};

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
pub struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    environment: String,
    version: String,
    memory_usage: String,
    records: RecordCounts,
    system: SystemInfo,
}

/// Last health report of one server instance.
#[derive(Default)]
pub struct HealthCache {
    last_check: AtomicI64,
    cached: RwLock<HealthCheckResponse>,
}

async fn build_health_response(state: &web::Data<AppState>) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let (status, records) = match state.project_handler.project_repo.count_records().await {
        Ok(counts) => ("healthy", counts),
        Err(e) => {
            tracing::warn!("Health check could not count records: {}", e);
            ("degraded", RecordCounts::default())
        }
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p|
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        );

    HealthCheckResponse {
        status: status.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        environment: state.environment.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        records,
        system: system_info,
    }
}

/// Reports liveness plus store and host statistics. The expensive system
/// probe is cached for a few seconds.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let cache = &state.health_cache;
    let now = Utc::now().timestamp();
    let last = cache.last_check.load(Ordering::Relaxed);

    if now - last > HEALTH_CACHE_SECS {
        let response = build_health_response(&state).await;

        *cache.cached.write() = response.clone();
        cache.last_check.store(now, Ordering::Relaxed);

        HttpResponse::Ok().json(response)
    } else {
        let response = cache.cached.read().clone();
        HttpResponse::Ok().json(response)
    }
}
