use axum::Json;
use serde::Serialize;
use sysinfo::System;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/v1/health
    pub async fn health_check() -> Json<HealthResponse> {
        info!("Health check requested");

        // Only refresh what's reported
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            metrics: SystemMetrics {
                cpu_usage_percent: sys.global_cpu_usage(),
                memory_used_bytes: memory_used,
                memory_total_bytes: memory_total,
                memory_usage_percent,
            },
        })
    }
}
