use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const API_PREFIX: &str = "/api";
pub const EDGE_API_PREFIX: &str = "/edge/api";
pub const SPA_INDEX_FILE: &str = "index.html";

/// Seconds a health report is reused before probing the host again.
pub const HEALTH_CACHE_SECS: i64 = 5;
