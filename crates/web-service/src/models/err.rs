use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 注意：学生不存在不属于错误，handler会直接重定向到列表页
#[derive(Error, Debug)]
pub enum AppError {
    /// 表单验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 页面模板渲染错误
    #[error(transparent)]
    TemplateError(#[from] askama::Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::RepositoryError(err) => {
                error!("repository error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response()
            }
            AppError::TemplateError(err) => {
                error!("template render error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Render failed: {err}")).into_response()
            }
        }
    }
}
