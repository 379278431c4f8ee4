//! 健康检查接口

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "student-records")]
    pub service: String,

    /// RFC3339格式的当前时间
    pub timestamp: String,
}

#[utoipa::path(get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "student-records".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
