//! Web服务模块
//!
//! 提供学生信息管理的服务端渲染页面和 API 文档服务

use crate::services::{StudentService, StudentServiceTrait};
use color_eyre::Result;
use database::{initialize_database, InMemoryStudentRepository, StudentRepository, StudentRepositoryTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{info, warn};

pub mod models;
pub mod routes;
pub mod services;
pub mod views;

pub use routes::create_app_router;

/// 应用共享状态
///
/// 每个请求都会clone一份，内部只有 `Arc`，开销很小
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<dyn StudentServiceTrait>,
}

impl AppState {
    /// 使用指定的学生仓库组装服务
    pub fn new<SR: StudentRepositoryTrait>(student_repository: SR) -> Self {
        Self {
            student_service: Arc::new(StudentService::new(student_repository)),
        }
    }

    /// 根据配置选择存储：配置了数据库则使用PostgreSQL，否则使用内存存储
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.database {
            Some(database) => {
                let pool = initialize_database(database).await?;
                Ok(Self::new(StudentRepository::new(pool)))
            }
            None => {
                warn!("⚠️ 未设置 DATABASE_URL，使用内存存储，重启后数据会丢失");
                Ok(Self::new(InMemoryStudentRepository::new()))
            }
        }
    }
}

/// 启动 Web 服务
pub async fn start_web_service(app_config: Arc<AppConfig>, shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::from_config(&app_config).await?;

    let router = create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", app_config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            wait_for_shutdown(shutdown_rx).await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown(mut shutdown_rx: Receiver<bool>) {
    // 如果已经是 true，直接返回
    if *shutdown_rx.borrow() {
        return;
    }

    // 等待信号变化，发送端被丢弃时同样视为关闭
    let _ = shutdown_rx.changed().await;
}
